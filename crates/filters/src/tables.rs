//! Bundled low-pass filter tables.
//!
//! Orthogonal families store the reconstruction low-pass filter only.
//! Biorthogonal families store, per primal order N, one zero-padded primal
//! row shared by every dual order M plus one dual row per M. See
//! [`crate::FilterBank`] for how the four filters are laid out from these.

/// Primal and dual low-pass rows of one biorthogonal family.
struct BiorRows {
    /// Primal row, zero-padded to the longest dual row of the family.
    primal: &'static [f64],
    /// `(M, dual row)` pairs in ascending M.
    duals: &'static [(u8, &'static [f64])],
}

/// Returns the `dbN` reconstruction low-pass filter.
pub(crate) fn daubechies(order: u8) -> Option<&'static [f64]> {
    DAUBECHIES.get(usize::from(order).checked_sub(1)?).copied()
}

/// Returns the `symN` reconstruction low-pass filter.
pub(crate) fn symlet(order: u8) -> Option<&'static [f64]> {
    SYMLETS.get(usize::from(order).checked_sub(2)?).copied()
}

/// Returns the `coifN` reconstruction low-pass filter.
pub(crate) fn coiflet(order: u8) -> Option<&'static [f64]> {
    COIFLETS.get(usize::from(order).checked_sub(1)?).copied()
}

/// Returns the `dmey` reconstruction low-pass filter.
pub(crate) fn discrete_meyer() -> &'static [f64] {
    &DISCRETE_MEYER
}

/// Returns `(primal, dual)` for `biorN.M`, with the primal row already
/// trimmed to the dual row's length.
pub(crate) fn biorthogonal(n: u8, m: u8) -> Option<(&'static [f64], &'static [f64])> {
    let rows = BIORTHOGONAL.get(usize::from(n).checked_sub(1)?)?;
    let (_, dual) = rows.duals.iter().find(|(order, _)| *order == m)?;
    let offset = (rows.primal.len() - dual.len()) / 2;
    Some((&rows.primal[offset..offset + dual.len()], *dual))
}

/// Dual orders available for primal order `n`.
pub(crate) fn biorthogonal_duals(n: u8) -> impl Iterator<Item = u8> {
    usize::from(n)
        .checked_sub(1)
        .and_then(|idx| BIORTHOGONAL.get(idx))
        .into_iter()
        .flat_map(|rows| rows.duals.iter().map(|(m, _)| *m))
}

/// Highest bundled biorthogonal primal order.
pub(crate) const BIORTHOGONAL_MAX: u8 = 6;
/// Highest bundled Daubechies order.
pub(crate) const DAUBECHIES_MAX: u8 = 20;
/// Highest bundled Symlet order (Symlets start at 2).
pub(crate) const SYMLETS_MAX: u8 = 20;
/// Highest bundled Coiflet order.
pub(crate) const COIFLETS_MAX: u8 = 5;

/// Daubechies `db1`..`db20` reconstruction low-pass filters.
static DAUBECHIES: [&[f64]; DAUBECHIES_MAX as usize] = [
    // db1
    &[
        0.7071067811865476,
        0.7071067811865476,
    ],
    // db2
    &[
        0.48296291314469025,
        0.836516303737469,
        0.22414386804185735,
        -0.12940952255092145,
    ],
    // db3
    &[
        0.3326705529509569,
        0.8068915093133388,
        0.4598775021193313,
        -0.13501102001039084,
        -0.08544127388224149,
        0.035226291882100656,
    ],
    // db4
    &[
        0.23037781330885523,
        0.7148465705525415,
        0.6308807679295904,
        -0.02798376941698385,
        -0.18703481171888114,
        0.030841381835986965,
        0.032883011666982945,
        -0.010597401784997278,
    ],
    // db5
    &[
        0.1601023979741929,
        0.6038292697971896,
        0.7243085284377729,
        0.13842814590132074,
        -0.24229488706638203,
        -0.032244869584638375,
        0.07757149384004633,
        -0.006241490212798342,
        -0.012580751999081999,
        0.0033357252854737712,
    ],
    // db6
    &[
        0.11154074335010945,
        0.4946238903984531,
        0.7511339080210954,
        0.31525035170919763,
        -0.22626469396543983,
        -0.12976686756726194,
        0.09750160558732246,
        0.027522865530305727,
        -0.031582039317486224,
        0.0005538422011614961,
        0.00477725751094554,
        -0.0010773010853084796,
    ],
    // db7
    &[
        0.077852054085009,
        0.39653931948191,
        0.72913209084623,
        0.46978228740519,
        -0.14390600392857,
        -0.22403618499387,
        0.07130921926683,
        0.080612609151077,
        -0.038029936935014,
        -0.016574541630667,
        0.012550998556099,
        0.00042957797292136,
        -0.0018016407040474,
        0.00035371379997452,
    ],
    // db8
    &[
        0.054415842243104,
        0.3128715909143,
        0.67563073629729,
        0.58535468365421,
        -0.01582910525635,
        -0.28401554296155,
        0.00047248457391328,
        0.12874742662048,
        -0.017369301001808,
        -0.044088253930795,
        0.013981027917398,
        0.0087460940474065,
        -0.004870352993452,
        -0.00039174037337695,
        0.00067544940645057,
        -0.00011747678412477,
    ],
    // db9
    &[
        0.038077947363878,
        0.24383467461259,
        0.60482312369011,
        0.6572880780513,
        0.13319738582501,
        -0.29327378327917,
        -0.096840783222976,
        0.1485407493381,
        0.030725681479333,
        -0.067632829061329,
        0.00025094711483146,
        0.02236166212368,
        -0.0047232047577518,
        -0.0042815036824635,
        0.0018476468830563,
        0.00023038576352319,
        -0.00025196318894271,
        3.9347319995026e-5,
    ],
    // db10
    &[
        0.026670057900555,
        0.18817680007763,
        0.52720118893158,
        0.68845903945344,
        0.28117234366057,
        -0.24984642432716,
        -0.19594627437729,
        0.12736934033575,
        0.093057364603807,
        -0.071394147166397,
        -0.029457536821945,
        0.033212674058933,
        0.003606553566987,
        -0.010733175483301,
        0.001395351746994,
        0.0019924052949908,
        -0.00068585669500468,
        -0.00011646685512928,
        9.3588670320069e-5,
        -1.3264202894521e-5,
    ],
    // db11
    &[
        0.018694297761471083,
        0.1440670211506245,
        0.44989976435604534,
        0.6856867749162006,
        0.41196436894790744,
        -0.16227524502749036,
        -0.27423084681794696,
        0.0660435881966832,
        0.14981201246637849,
        -0.046479955116684187,
        -0.0664387856950252,
        0.031335090219046076,
        0.020840904360181062,
        -0.0153648209062016,
        -0.0033408588730144454,
        0.004928417656059041,
        -0.0003085928588151432,
        -0.0008930232506662646,
        0.0002491525235528235,
        5.4439074699368475e-5,
        -3.4634984186984996e-5,
        4.49427427723651e-6,
    ],
    // db12
    &[
        0.013112257957229518,
        0.10956627282118515,
        0.37735513521421266,
        0.6571987225793071,
        0.5158864784278157,
        -0.04476388565377463,
        -0.3161784537527855,
        -0.023779257256069726,
        0.18247860592757967,
        0.00535956967435215,
        -0.09643212009650708,
        0.010849130255822185,
        0.04154627749508444,
        -0.01221864906974828,
        -0.012840825198300683,
        0.00671149900879551,
        0.0022486072409952378,
        -0.0021795036186277603,
        6.545128212509596e-6,
        0.00038865306282093143,
        -8.850410920820432e-5,
        -2.4241545757030785e-5,
        1.2776952219379767e-5,
        -1.529071758068511e-6,
    ],
    // db13
    &[
        0.009202133538962367,
        0.08286124387290278,
        0.31199632216043804,
        0.6110558511587877,
        0.5888895704312189,
        0.08698572617964724,
        -0.31497290771138864,
        -0.12457673075081525,
        0.17947607942933985,
        0.07294893365677717,
        -0.10580761818793433,
        -0.026488406475343694,
        0.05613947710028343,
        0.0023799722540590786,
        -0.02383142071032365,
        0.003923941448797416,
        0.007255589401617566,
        -0.0027619112346568622,
        -0.001315673911892299,
        0.0009323261308672633,
        4.9251525126289464e-5,
        -0.0001651289885565055,
        3.0678537579325496e-5,
        1.0441930571408138e-5,
        -4.700416479360868e-6,
        5.220035098454864e-7,
    ],
    // db14
    &[
        0.006461153460087948,
        0.0623647588493989,
        0.2548502677926214,
        0.5543056179408938,
        0.6311878491048568,
        0.21867068775890652,
        -0.27168855227874805,
        -0.21803352999327605,
        0.1383952138648066,
        0.1399890165844607,
        -0.08674841156816969,
        -0.07154895550404614,
        0.05523712625921604,
        0.026981408307912916,
        -0.030185351540390634,
        -0.005615049530356959,
        0.01278949326633341,
        -0.000746218989268385,
        -0.0038496388680221874,
        0.001061691085606762,
        0.0007080211542355279,
        -0.0003868319473129545,
        -4.1777245770372596e-5,
        6.87550425269751e-5,
        -1.0337209184570774e-5,
        -4.389704901781394e-6,
        1.7249946753678127e-6,
        -1.7871399683113592e-7,
    ],
    // db15
    &[
        0.004538537361578899,
        0.04674339489276627,
        0.20602386398699574,
        0.4926317717081396,
        0.6458131403574243,
        0.3390025354547315,
        -0.19320413960914543,
        -0.28888259656696563,
        0.06528295284877282,
        0.190146714007123,
        -0.039666176555790945,
        -0.1111209360372317,
        0.033877143923507685,
        0.05478055058450761,
        -0.025767007328439964,
        -0.020810050169693083,
        0.015083918027835902,
        0.005101000360407543,
        -0.006487734560315745,
        -0.00024175649076162427,
        0.0019433239803822114,
        -0.000373482354137617,
        -0.0003595652443624688,
        0.00015589648992059973,
        2.5792699155318936e-5,
        -2.8133296266047814e-5,
        3.36298718173758e-6,
        1.8112704079405772e-6,
        -6.316882325881664e-7,
        6.133359913305752e-8,
    ],
    // db16
    &[
        0.003189220925347738,
        0.034907714323673344,
        0.16506428348885313,
        0.4303127228460038,
        0.637356332083789,
        0.4402902568863569,
        -0.08975108940248964,
        -0.3270633105279177,
        -0.027918208133028276,
        0.2111906939471043,
        0.027340263752716042,
        -0.1323883055638104,
        -0.006239722752474872,
        0.07592423604427631,
        -0.007588974368857738,
        -0.03688839769173014,
        0.01029765964095597,
        0.013993768859828731,
        -0.006990014563413916,
        -0.00364427962149839,
        0.003128023381206269,
        0.00040789698084971285,
        -0.0009410217493595676,
        0.00011424152003872239,
        0.00017478724522533817,
        -6.103596621410936e-5,
        -1.3945668988208893e-5,
        1.1336608661276258e-5,
        -1.0435713423116066e-6,
        -7.363656785451205e-7,
        2.3087840868575457e-7,
        -2.109339630100743e-8,
    ],
    // db17
    &[
        0.0022418070010373128,
        0.025985393703606044,
        0.1312149033078244,
        0.37035072415264114,
        0.6109966156846228,
        0.5183157640569378,
        0.027314970403293636,
        -0.32832074836396175,
        -0.1265997522158827,
        0.197310589565011,
        0.10113548917747027,
        -0.1268156917782863,
        -0.05709141963167693,
        0.08110598665416088,
        0.022312336178103798,
        -0.04692243838926974,
        -0.0032709555358192938,
        0.02273367658394627,
        -0.003042989981354637,
        -0.008602921520322855,
        0.0029679966915260947,
        0.0023012052421535457,
        -0.0014368453048029762,
        -0.00032813251940983797,
        0.0004394654277686437,
        -2.5610109566548458e-5,
        -8.204803202453391e-5,
        2.3186813798745952e-5,
        6.9906009850767515e-6,
        -4.505942477222988e-6,
        3.0165496099945573e-7,
        2.957700933316857e-7,
        -8.42394844600268e-8,
        7.2674929685616085e-9,
    ],
    // db18
    &[
        0.0015763102184407605,
        0.019288531724146376,
        0.10358846582242359,
        0.3146789413370317,
        0.5718268077666072,
        0.5718016548886513,
        0.14722311196992816,
        -0.29365404073655876,
        -0.21648093400514298,
        0.14953397556537779,
        0.1670813127632574,
        -0.09233188415084628,
        -0.10675224665982849,
        0.06488721621190545,
        0.057051247738536884,
        -0.044526141902982326,
        -0.023733210395860002,
        0.02667070592647059,
        0.006262167954305707,
        -0.013051480946612001,
        0.00011863003385811746,
        0.004943343605466738,
        -0.0011187326669924971,
        -0.0013405962983361066,
        0.0006284656829651457,
        0.0002135815619103407,
        -0.00019864855231174796,
        -1.5359171235347246e-7,
        3.7412378807400385e-5,
        -8.520602537446696e-6,
        -3.332634478885822e-6,
        1.7687129836276155e-6,
        -7.691632689885177e-8,
        -1.1760987670282317e-7,
        3.068835863045175e-8,
        -2.5079344549485983e-9,
    ],
    // db19
    &[
        0.0011086697631817106,
        0.014281098450764397,
        0.08127811326545956,
        0.26438843174089677,
        0.5244363774646549,
        0.6017045491275379,
        0.26089495265103885,
        -0.22809139421548263,
        -0.28583863175582624,
        0.07465226970810326,
        0.21234974330627848,
        -0.03351854190230288,
        -0.1427856950387366,
        0.027584350625628667,
        0.08690675555581223,
        -0.02650123625012304,
        -0.04567422627723091,
        0.02162376740958505,
        0.019375549889176127,
        -0.013988388678535142,
        -0.005866922281012175,
        0.007040747367105243,
        0.0007689543592575484,
        -0.002687551800701582,
        0.00034180865345859575,
        0.0007358025205054352,
        -0.000260676135678628,
        -0.00012460079173415878,
        8.711270467219923e-5,
        5.105950487073886e-6,
        -1.6640176297154945e-5,
        3.0109643162965265e-6,
        1.531931476691193e-6,
        -6.862755657769143e-7,
        1.4470882987978445e-8,
        4.6369377757826045e-8,
        -1.1164020670358259e-8,
        8.666848838997619e-10,
    ],
    // db20
    &[
        0.0007799536136668463,
        0.010549394624950399,
        0.06342378045908152,
        0.21994211355139703,
        0.4726961853109017,
        0.6104932389385939,
        0.36150229873933104,
        -0.13921208801148388,
        -0.32678680043403496,
        -0.016727088309077008,
        0.22829105081991632,
        0.0398502464577712,
        -0.15545875070726795,
        -0.024716827338613585,
        0.10229171917444256,
        0.005632246857307436,
        -0.06172289962468046,
        0.005874681811811827,
        0.03229429953076958,
        -0.00878932492390156,
        -0.01381052613715192,
        0.006721627302259457,
        0.004420542387045791,
        -0.0035814942596096226,
        -0.0008315621728225569,
        0.0013925596193231364,
        -5.349759843997695e-5,
        -0.00038510474869921763,
        0.00010153288973670291,
        6.77428082837773e-5,
        -3.710586183394713e-5,
        -4.376143862183997e-6,
        7.2412482876736205e-6,
        -1.0119940100188862e-6,
        -6.847079597000557e-7,
        2.6339242262700013e-7,
        2.0143220235505126e-10,
        -1.814843248299696e-8,
        4.056127055551833e-9,
        -2.9988364896193194e-10,
    ],
];

/// Symlet `sym2`..`sym20` reconstruction low-pass filters.
static SYMLETS: [&[f64]; SYMLETS_MAX as usize - 1] = [
    // sym2
    &[
        0.48296291314469025,
        0.836516303737469,
        0.22414386804185735,
        -0.12940952255092145,
    ],
    // sym3
    &[
        0.3326705529509569,
        0.8068915093133388,
        0.4598775021193313,
        -0.13501102001039084,
        -0.08544127388224149,
        0.035226291882100656,
    ],
    // sym4
    &[
        0.0322231006040427,
        -0.012603967262037833,
        -0.09921954357684722,
        0.29785779560527736,
        0.8037387518059161,
        0.49761866763201545,
        -0.02963552764599851,
        -0.07576571478927333,
    ],
    // sym5
    &[
        0.019538882735286728,
        -0.021101834024758855,
        -0.17532808990845047,
        0.01660210576452232,
        0.6339789634582119,
        0.7234076904024206,
        0.1993975339773936,
        -0.039134249302383094,
        0.029519490925774643,
        0.027333068345077982,
    ],
    // sym6
    &[
        -0.007800708325034148,
        0.0017677118642428036,
        0.04472490177066578,
        -0.021060292512300564,
        -0.07263752278646252,
        0.3379294217276218,
        0.787641141030194,
        0.4910559419267466,
        -0.048311742585633,
        -0.11799011114819057,
        0.0034907120842174702,
        0.015404109327027373,
    ],
    // sym7
    &[
        0.010268176708511255,
        0.004010244871533663,
        -0.10780823770381774,
        -0.14004724044296152,
        0.2886296317515146,
        0.767764317003164,
        0.5361019170917628,
        0.017441255086855827,
        -0.049552834937127255,
        0.0678926935013727,
        0.03051551316596357,
        -0.01263630340325193,
        -0.0010473848886829163,
        0.002681814568257878,
    ],
    // sym8
    &[
        0.0018899503327594609,
        -0.0003029205147213668,
        -0.01495225833704823,
        0.003808752013890615,
        0.049137179673607506,
        -0.027219029917056003,
        -0.05194583810770904,
        0.3644418948353314,
        0.7771857517005235,
        0.4813596512583722,
        -0.061273359067658524,
        -0.1432942383508097,
        0.007607487324917605,
        0.03169508781149298,
        -0.0005421323317911481,
        -0.0033824159510061256,
    ],
    // sym9
    &[
        0.0010694900329086053,
        -0.0004731544986800831,
        -0.010264064027633142,
        0.008859267493400484,
        0.06207778930288603,
        -0.018233770779395985,
        -0.19155083129728512,
        0.035272488035271894,
        0.6173384491409358,
        0.717897082764412,
        0.238760914607303,
        -0.05456895843083407,
        0.0005834627461258068,
        0.03022487885827568,
        -0.01152821020767923,
        -0.013271967781817119,
        0.0006197808889855868,
        0.0014009155259146807,
    ],
    // sym10
    &[
        -0.0004593294210046588,
        5.7036083618494284e-5,
        0.004593173585311828,
        -0.0008043589320165449,
        -0.02035493981231129,
        0.005764912033581909,
        0.04999497207737669,
        -0.0319900568824278,
        -0.03553674047381755,
        0.38382676106708546,
        0.7695100370211071,
        0.47169066693843925,
        -0.07088053578324385,
        -0.15949427888491757,
        0.011609893903711381,
        0.0459272392310922,
        -0.0014653825813050513,
        -0.008641299277022422,
        9.563267072289475e-5,
        0.0007701598091144901,
    ],
    // sym11
    &[
        0.000489263610261903,
        0.0001105350976426903,
        -0.006389603666454665,
        -0.0020034719001089793,
        0.04300019068155133,
        0.03526675956446462,
        -0.1446023437053119,
        -0.2046547944957883,
        0.23768990904925752,
        0.7303435490883896,
        0.5720229780100758,
        0.09719839445890552,
        -0.02283265102256226,
        0.06997679961073293,
        0.037037415978858186,
        -0.02408084159586358,
        -0.009857934828789213,
        0.00651249567477152,
        0.0005883527353969825,
        -0.0017343662672978377,
        -3.8795655736148036e-5,
        0.0001717219506993481,
    ],
    // sym12
    &[
        -0.00017906658697508447,
        -1.8158078862632958e-5,
        0.0023502976141833473,
        0.00030764779631052455,
        -0.014589836449233534,
        -0.002604391031331419,
        0.05780417944550475,
        0.015301740622480154,
        -0.17037069723884962,
        -0.07833262231631544,
        0.46274103121928645,
        0.7634790977836405,
        0.398885972390192,
        -0.022162306170351302,
        -0.035848830736954634,
        0.0491793182996612,
        0.007553780611679315,
        -0.024220722675013403,
        -0.001408909244329129,
        0.007414965517654315,
        0.00018021409008521752,
        -0.001349755755571579,
        -1.1353928041526612e-5,
        0.00011196719424656528,
    ],
    // sym13
    &[
        7.042986690696273e-5,
        3.690537342323894e-5,
        -0.0007213643851363755,
        0.0004132611988416782,
        0.005674853760123338,
        -0.0014924472742587286,
        -0.020749686325520652,
        0.017618296880645045,
        0.09292603089914397,
        0.008819757670429852,
        -0.14049009311367552,
        0.11023022302128688,
        0.6445643839011571,
        0.6957391505615691,
        0.19770481877126597,
        -0.12436246075150338,
        -0.059750627717956466,
        0.01386249743583841,
        -0.017211642726304387,
        -0.020216768133395468,
        0.005296359738721862,
        0.00752622538996817,
        -0.00017094285852957213,
        -0.001136063438927969,
        -3.573862364871594e-5,
        6.820325263074355e-5,
    ],
    // sym14
    &[
        4.461897799148456e-5,
        1.9329016965548985e-5,
        -0.0006057601824664403,
        -7.321421356689134e-5,
        0.004532677471946337,
        0.0010131419871843175,
        -0.019439314263628174,
        -0.002365048836736659,
        0.0698276163618212,
        0.025898587531053823,
        -0.1599974111465199,
        -0.05811182331765858,
        0.47533576263434446,
        0.7599762419611892,
        0.39320152196203945,
        -0.03531811211510752,
        -0.05763449835141097,
        0.03743308836282358,
        0.0042805204990007525,
        -0.029196217764050975,
        -0.002753774791224789,
        0.010037693717674817,
        0.0003664765736599812,
        -0.0025794417259337628,
        -6.286542481474576e-5,
        0.00039843567297607205,
        1.1210865808903235e-5,
        -2.5879090265402585e-5,
    ],
    // sym15
    &[
        2.866070852533231e-5,
        2.1717890150808833e-5,
        -0.0004021685376030732,
        -0.00010815440168565741,
        0.0034810287370659995,
        0.001526138278183266,
        -0.01717125278164452,
        -0.008744788886485916,
        0.06796982904489572,
        0.06839331006051017,
        -0.13405629845628275,
        -0.19662635876631657,
        0.24396270543218165,
        0.7218430296363336,
        0.5786404152151502,
        0.11153369514258364,
        -0.041082666635469264,
        0.040735479696770494,
        0.021937642719737218,
        -0.03887671687685497,
        -0.019405011430946084,
        0.010079977087906634,
        0.0034234507363524206,
        -0.0035901654473736223,
        -0.00026731644647202594,
        0.0010705672194627174,
        5.5122547855653366e-5,
        -0.00016066186637499557,
        -7.359666798928679e-6,
        9.712419737964491e-6,
    ],
    // sym16
    &[
        -1.0797982104330864e-5,
        -5.396483179313488e-6,
        0.00016545679579123957,
        3.656592483330303e-5,
        -0.001338720606693644,
        -0.0002221164762103135,
        0.006937761130811371,
        0.0013598447424801486,
        -0.024952758046315127,
        -0.0035102750683370914,
        0.07803785290354831,
        0.03072113906329964,
        -0.1595921921853958,
        -0.05404060138744081,
        0.47534280601234713,
        0.7565249878763846,
        0.39712293362039824,
        -0.03457422841769919,
        -0.0669830490706191,
        0.03233309161058235,
        0.004869274404814542,
        -0.03105120284364275,
        -0.0031265171722736304,
        0.012666731659876957,
        0.0007182119788254316,
        -0.0038809122526122205,
        -0.00010844562230766216,
        0.0008523547108065521,
        2.8078582128206924e-5,
        -0.00010943147929558312,
        -3.1135564076138703e-6,
        6.230006701237647e-6,
    ],
    // sym17
    &[
        3.7912531943316247e-6,
        -2.4527163425740825e-6,
        -7.607124405602918e-5,
        2.5207933140671322e-5,
        0.0007198270642145453,
        5.840042869518092e-5,
        -0.003932325279794941,
        -0.0019054076898564055,
        0.012396988366634302,
        0.009952982523507613,
        -0.01803889724190139,
        -0.007261634750933915,
        0.01615880872591857,
        -0.08607087472063264,
        -0.1550760053497069,
        0.18053958458074407,
        0.681488995344317,
        0.6507166292043823,
        0.1423983504151139,
        -0.11856693261099856,
        0.01727117821060019,
        0.10475461484219489,
        0.01790395221438949,
        -0.03329138349230622,
        -0.004819212803181354,
        0.010482366933016147,
        0.0008567700701928022,
        -0.0027416759756781813,
        -0.00013864230268101327,
        0.00047599638026318304,
        -1.3506383399799107e-5,
        -6.293702597545909e-5,
        2.780126693825943e-6,
        4.297343327338256e-6,
    ],
    // sym18
    &[
        -1.5131530692320486e-6,
        7.847298055848573e-7,
        2.955743762087669e-5,
        -9.858816030038168e-6,
        -0.000265830110241981,
        4.741614518228368e-5,
        0.0014280863270799422,
        -0.0001887762394005706,
        -0.005239789683013974,
        0.0010877847895682568,
        0.01501235634421641,
        -0.0032607441999778558,
        -0.03171268473169947,
        0.00627794455413226,
        0.028529597038742298,
        -0.07379920729088593,
        -0.03248057329150485,
        0.40148386056768737,
        0.7536291400999388,
        0.47396905989574695,
        -0.05202915898042007,
        -0.15993814866769704,
        0.03399566710354207,
        0.08421992997007587,
        -0.00507708516041699,
        -0.03032509108914365,
        0.0016429863972087337,
        0.009502164390909605,
        -0.0004115211092058262,
        -0.0023138718144868685,
        7.021273458599636e-5,
        0.00039616840637938817,
        -1.4020992577002794e-5,
        -4.524675787451531e-5,
        1.3549157617851244e-6,
        2.6126125564557025e-6,
    ],
    // sym19
    &[
        1.7509367995304997e-6,
        2.062317063229324e-6,
        -2.8151138661488743e-5,
        -1.6821387029242595e-5,
        0.00027621877685681965,
        0.00012930767650608303,
        -0.0017049602611613154,
        -0.0006179223277899935,
        0.008262236955522643,
        0.004319351874887417,
        -0.027709896931223672,
        -0.016908234861133548,
        0.08407267627938503,
        0.09363084341592179,
        -0.11624173010700133,
        -0.17659686625099993,
        0.2582661692381038,
        0.7195555257159846,
        0.5781449453372968,
        0.10902582508022089,
        -0.067525058040684,
        0.008954591172977125,
        0.007015573857219181,
        -0.04663598353477771,
        -0.022651993378066386,
        0.015797439295764448,
        0.007968438320637783,
        -0.005122205002569428,
        -0.0011607032571970346,
        0.0021214250281832055,
        0.00015915804767957373,
        -0.0006357645150042333,
        -4.612039600171763e-5,
        0.00011553923333583907,
        8.873312173693282e-6,
        -1.1880518269831197e-5,
        -6.463651303333404e-7,
        5.487732768218514e-7,
    ],
    // sym20
    &[
        -6.329129045042896e-7,
        -3.2567026426308275e-7,
        1.2287252778374232e-5,
        4.525422210086227e-6,
        -0.00011739133516628476,
        -2.661555034277681e-5,
        0.0007476108598012617,
        0.00012544091727041256,
        -0.003471647802925689,
        -0.0006111263859779794,
        0.012157040948987497,
        0.0019385970676619735,
        -0.03537333675746389,
        -0.006843701966974055,
        0.08891966802862601,
        0.03625095165576088,
        -0.16057829842072482,
        -0.05108834293600639,
        0.4719914750911054,
        0.7511627284288979,
        0.4058314443632748,
        -0.02981936887124318,
        -0.0789943449267614,
        0.025579349509566317,
        0.008123228356394549,
        -0.03162943714548432,
        -0.003313857384407233,
        0.0170040490232798,
        0.0014230873596194143,
        -0.006606585799120731,
        -0.00030526283188065685,
        0.0020889947081866745,
        7.215991190073666e-5,
        -0.0004947310915655073,
        -1.9284123010161865e-5,
        7.992967835712114e-5,
        3.0256660631185363e-6,
        -7.91936141189395e-6,
        -1.9015675892278172e-7,
        3.695537474791267e-7,
    ],
];

/// Coiflet `coif1`..`coif5` reconstruction low-pass filters.
static COIFLETS: [&[f64]; COIFLETS_MAX as usize] = [
    // coif1
    &[
        -0.0727326195128539,
        0.3378976624578092,
        0.8525720202122554,
        0.38486484686420286,
        -0.0727326195128539,
        -0.01565572813546454,
    ],
    // coif2
    &[
        0.016387336463522112,
        -0.04146493678175915,
        -0.06737255472196302,
        0.3861100668211622,
        0.8127236354455423,
        0.41700518442169254,
        -0.0764885990783064,
        -0.0594344186464569,
        0.023680171946334084,
        0.0056114348193944995,
        -0.0018232088707029932,
        -0.0007205494453645122,
    ],
    // coif3
    &[
        -0.003793512864491014,
        0.007782596427325418,
        0.023452696141836267,
        -0.0657719112818555,
        -0.06112339000267287,
        0.4051769024096169,
        0.7937772226256206,
        0.42848347637761874,
        -0.07179982161931202,
        -0.08230192710688598,
        0.03455502757306163,
        0.015880544863615904,
        -0.00900797613666158,
        -0.0025745176887502236,
        0.0011175187708906016,
        0.0004662169601128863,
        -7.098330313814125e-5,
        -3.459977283621256e-5,
    ],
    // coif4
    &[
        0.0008923136685823146,
        -0.0016294920126017326,
        -0.0073461663276420935,
        0.016068943964776348,
        0.026682300156053072,
        -0.08126669968087875,
        -0.05607731331675481,
        0.41530840703043026,
        0.782238930920499,
        0.4343860564914685,
        -0.06662747426342504,
        -0.09622044203398798,
        0.03933442712333749,
        0.025082261844864097,
        -0.015211731527946259,
        -0.00565828668661072,
        0.003751436157278457,
        0.0012665619292989445,
        -0.0005890207562443383,
        -0.00025997455248771324,
        6.233903446100713e-5,
        3.1229875865345646e-5,
        -3.2596802368833675e-6,
        -1.7849850030882614e-6,
    ],
    // coif5
    &[
        -0.00021208083980379827,
        0.00035858968789573785,
        0.0021782363581090178,
        -0.004159358781386048,
        -0.010131117519849788,
        0.023408156785839195,
        0.02816802897093635,
        -0.09192001055969624,
        -0.05204316317624377,
        0.4215662066908515,
        0.7742896036529562,
        0.4379916261718371,
        -0.06203596396290357,
        -0.10557420870333893,
        0.0412892087501817,
        0.03268357426711183,
        -0.01976177894257264,
        -0.009164231162481846,
        0.006764185448053083,
        0.0024333732126576722,
        -0.0016628637020130838,
        -0.0006381313430451114,
        0.00030225958181306315,
        0.00014054114970203437,
        -4.134043227251251e-5,
        -2.1315026809955787e-5,
        3.7346551751414047e-6,
        2.0637618513646814e-6,
        -1.6744288576823017e-7,
        -9.517657273819165e-8,
    ],
];

/// Discrete Meyer (`dmey`) reconstruction low-pass filter, a 62-tap FIR
/// approximation.
static DISCRETE_MEYER: [f64; 62] = [
    -1.009999956941423e-12,
    8.519459636796214e-9,
    -1.111944952595278e-8,
    -1.0798819539621958e-8,
    6.066975741351135e-8,
    -1.0866516536735883e-7,
    8.200680650386481e-8,
    1.1783004497663934e-7,
    -5.506340565252278e-7,
    1.1307947017916706e-6,
    -1.489549216497156e-6,
    7.367572885903746e-7,
    3.20544191334478e-6,
    -1.6312699734552807e-5,
    6.554305930575149e-5,
    -0.0006011502343516092,
    -0.002704672124643725,
    0.002202534100911002,
    0.006045814097323304,
    -0.006387718318497156,
    -0.011061496392513451,
    0.015270015130934803,
    0.017423434103729693,
    -0.03213079399021176,
    -0.024348745906078023,
    0.0637390243228016,
    0.030655091960824263,
    -0.13284520043622938,
    -0.035087555656258346,
    0.44459300275757724,
    0.7445855923188063,
    0.44459300275757724,
    -0.035087555656258346,
    -0.13284520043622938,
    0.030655091960824263,
    0.0637390243228016,
    -0.024348745906078023,
    -0.03213079399021176,
    0.017423434103729693,
    0.015270015130934803,
    -0.011061496392513451,
    -0.006387718318497156,
    0.006045814097323304,
    0.002202534100911002,
    -0.002704672124643725,
    -0.0006011502343516092,
    6.554305930575149e-5,
    -1.6312699734552807e-5,
    3.20544191334478e-6,
    7.367572885903746e-7,
    -1.489549216497156e-6,
    1.1307947017916706e-6,
    -5.506340565252278e-7,
    1.1783004497663934e-7,
    8.200680650386481e-8,
    -1.0866516536735883e-7,
    6.066975741351135e-8,
    -1.0798819539621958e-8,
    -1.111944952595278e-8,
    8.519459636796214e-9,
    -1.009999956941423e-12,
    0.0,
];

/// Biorthogonal rows for N = 1..6.
static BIORTHOGONAL: [BiorRows; BIORTHOGONAL_MAX as usize] = [
    // bior1.x
    BiorRows {
        primal: &[
            0.0,
            0.0,
            0.0,
            0.0,
            0.7071067811865476,
            0.7071067811865476,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        duals: &[
            (
                1,
                &[
                    0.7071067811865476,
                    0.7071067811865476,
                ],
            ),
            (
                3,
                &[
                    -0.08838834764831845,
                    0.08838834764831845,
                    0.7071067811865476,
                    0.7071067811865476,
                    0.08838834764831845,
                    -0.08838834764831845,
                ],
            ),
            (
                5,
                &[
                    0.016572815184059706,
                    -0.016572815184059706,
                    -0.12153397801643785,
                    0.12153397801643785,
                    0.7071067811865476,
                    0.7071067811865476,
                    0.12153397801643785,
                    -0.12153397801643785,
                    -0.016572815184059706,
                    0.016572815184059706,
                ],
            ),
        ],
    },
    // bior2.x
    BiorRows {
        primal: &[
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.3535533905932738,
            0.7071067811865476,
            0.3535533905932738,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        duals: &[
            (
                2,
                &[
                    -0.1767766952966369,
                    0.3535533905932738,
                    1.0606601717798212,
                    0.3535533905932738,
                    -0.1767766952966369,
                    0.0,
                ],
            ),
            (
                4,
                &[
                    0.03314563036811941,
                    -0.06629126073623882,
                    -0.1767766952966369,
                    0.4198446513295126,
                    0.9943689110435825,
                    0.4198446513295126,
                    -0.1767766952966369,
                    -0.06629126073623882,
                    0.03314563036811941,
                    0.0,
                ],
            ),
            (
                6,
                &[
                    -0.006905339660024878,
                    0.013810679320049757,
                    0.04695630968816917,
                    -0.1077232986963881,
                    -0.16987135563661201,
                    0.4474660099696121,
                    0.966747552403483,
                    0.4474660099696121,
                    -0.16987135563661201,
                    -0.1077232986963881,
                    0.04695630968816917,
                    0.013810679320049757,
                    -0.006905339660024878,
                    0.0,
                ],
            ),
            (
                8,
                &[
                    0.0015105430506304422,
                    -0.0030210861012608843,
                    -0.012947511862546647,
                    0.02891610982635418,
                    0.05299848189069094,
                    -0.13491307360773605,
                    -0.16382918343409023,
                    0.46257144047591653,
                    0.9516421218971786,
                    0.46257144047591653,
                    -0.16382918343409023,
                    -0.13491307360773605,
                    0.05299848189069094,
                    0.02891610982635418,
                    -0.012947511862546647,
                    -0.0030210861012608843,
                    0.0015105430506304422,
                    0.0,
                ],
            ),
        ],
    },
    // bior3.x
    BiorRows {
        primal: &[
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.1767766952966369,
            0.5303300858899106,
            0.5303300858899106,
            0.1767766952966369,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        duals: &[
            (
                1,
                &[
                    -0.3535533905932738,
                    1.0606601717798212,
                    1.0606601717798212,
                    -0.3535533905932738,
                ],
            ),
            (
                3,
                &[
                    0.06629126073623882,
                    -0.1988737822087165,
                    -0.15467960838455727,
                    0.9943689110435825,
                    0.9943689110435825,
                    -0.15467960838455727,
                    -0.1988737822087165,
                    0.06629126073623882,
                ],
            ),
            (
                5,
                &[
                    -0.013810679320049757,
                    0.04143203796014927,
                    0.052480581416189075,
                    -0.26792717880896527,
                    -0.07181553246425873,
                    0.966747552403483,
                    0.966747552403483,
                    -0.07181553246425873,
                    -0.26792717880896527,
                    0.052480581416189075,
                    0.04143203796014927,
                    -0.013810679320049757,
                ],
            ),
            (
                7,
                &[
                    0.0030210861012608843,
                    -0.009063258303782653,
                    -0.01683176542131064,
                    0.074663985074019,
                    0.03133297870736289,
                    -0.301159125922835,
                    -0.02649924094534547,
                    0.9516421218971786,
                    0.9516421218971786,
                    -0.02649924094534547,
                    -0.301159125922835,
                    0.03133297870736289,
                    0.074663985074019,
                    -0.01683176542131064,
                    -0.009063258303782653,
                    0.0030210861012608843,
                ],
            ),
            (
                9,
                &[
                    -0.0006797443727836989,
                    0.002039233118351097,
                    0.005060319219611981,
                    -0.020618912641105536,
                    -0.014112787930175844,
                    0.09913478249423216,
                    0.012300136269419315,
                    -0.32019196836077857,
                    0.0020500227115698858,
                    0.9421257006782068,
                    0.9421257006782068,
                    0.0020500227115698858,
                    -0.32019196836077857,
                    0.012300136269419315,
                    0.09913478249423216,
                    -0.014112787930175844,
                    -0.020618912641105536,
                    0.005060319219611981,
                    0.002039233118351097,
                    -0.0006797443727836989,
                ],
            ),
        ],
    },
    // bior4.x
    BiorRows {
        primal: &[
            0.0,
            -0.06453888262869706,
            -0.04068941760916406,
            0.41809227322161724,
            0.7884856164055829,
            0.41809227322161724,
            -0.04068941760916406,
            -0.06453888262869706,
            0.0,
            0.0,
        ],
        duals: &[
            (
                4,
                &[
                    0.03782845550726404,
                    -0.023849465019556843,
                    -0.11062440441843718,
                    0.37740285561283066,
                    0.8526986790088938,
                    0.37740285561283066,
                    -0.11062440441843718,
                    -0.023849465019556843,
                    0.03782845550726404,
                    0.0,
                ],
            ),
        ],
    },
    // bior5.x
    BiorRows {
        primal: &[
            0.013456709459118716,
            -0.002694966880111507,
            -0.13670658466432914,
            -0.09350469740093886,
            0.47680326579848425,
            0.8995061097486484,
            0.47680326579848425,
            -0.09350469740093886,
            -0.13670658466432914,
            -0.002694966880111507,
            0.013456709459118716,
            0.0,
        ],
        duals: &[
            (
                5,
                &[
                    0.0,
                    0.03968708834740544,
                    0.007948108637240322,
                    -0.05446378846823691,
                    0.34560528195603346,
                    0.7366601814282105,
                    0.34560528195603346,
                    -0.05446378846823691,
                    0.007948108637240322,
                    0.03968708834740544,
                    0.0,
                    0.0,
                ],
            ),
        ],
    },
    // bior6.x
    BiorRows {
        primal: &[
            0.0,
            0.0,
            0.0,
            0.014426282505624435,
            0.014467504896790148,
            -0.07872200106262882,
            -0.04036797903033992,
            0.41784910915027457,
            0.7589077294536541,
            0.41784910915027457,
            -0.04036797903033992,
            -0.07872200106262882,
            0.014467504896790148,
            0.014426282505624435,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        duals: &[
            (
                8,
                &[
                    0.0019088317364812906,
                    -0.0019142861290887667,
                    -0.016990639867602342,
                    0.01193456527972926,
                    0.04973290349094079,
                    -0.07726317316720414,
                    -0.09405920349573646,
                    0.4207962846098268,
                    0.8259229974584023,
                    0.4207962846098268,
                    -0.09405920349573646,
                    -0.07726317316720414,
                    0.04973290349094079,
                    0.01193456527972926,
                    -0.016990639867602342,
                    -0.0019142861290887667,
                    0.0019088317364812906,
                    0.0,
                ],
            ),
        ],
    },
];
