//! Legacy sponge parameter tables: 64 full rounds with a trailing key
//! row (65 rows of round keys) and the legacy MDS matrix. All entries
//! are Montgomery-form limb literals.

use curve::Fp;

pub(crate) const LEGACY_ROUND_KEYS: [[Fp; 3]; 65] = [
    [
        Fp::from_montgomery_limbs([0x01b124104fa01726, 0xad9b3ddb4c7aaab8, 0x7b95dbead89679c0, 0x08d25aaf298f693c]),
        Fp::from_montgomery_limbs([0xc1edde252042b5f0, 0xfb1928c895f86621, 0xb1809b8bf77413f8, 0x2ab8d2c2d1aeed9b]),
        Fp::from_montgomery_limbs([0x5b9c81ee2d14a60b, 0xe84c348a86f08f44, 0xd79a10ade19c6dfd, 0x0a6a89a6595a1896]),
    ],
    [
        Fp::from_montgomery_limbs([0x28c2358db123539e, 0x15f920ea8ffcb857, 0x2d00722d2bd8424a, 0x30d2a4d6ccbd2641]),
        Fp::from_montgomery_limbs([0xa93f1706097416cf, 0x7b3830fab7420e06, 0xc0d8f4c25d5ead94, 0x04c9feabb1136a64]),
        Fp::from_montgomery_limbs([0x482713006386286a, 0x7166f35a51598fe5, 0x7689d3f2cf7414d2, 0x3a58f6bcd6fb2d38]),
    ],
    [
        Fp::from_montgomery_limbs([0x8a79b5a87d06a74d, 0xc11cfa25e04ef67d, 0x4e521c377308c383, 0x0788dd5134fc3b1f]),
        Fp::from_montgomery_limbs([0xc4ff557cc3afa3eb, 0xea374eb2f8d1f9a1, 0x8694ac2ce8222351, 0x02b1520a28bcbe93]),
        Fp::from_montgomery_limbs([0xe2ae92a2bab96058, 0x14ec053e1f2204da, 0x6c6186f648470b05, 0x202c650c9b11a63c]),
    ],
    [
        Fp::from_montgomery_limbs([0x00e94fb0b6549fe5, 0x495b43e3a5a67afa, 0x2f6a4e90ae6226b9, 0x01e3a9c1139fccbe]),
        Fp::from_montgomery_limbs([0x082bfd7f56fa633e, 0xaea5e20c753afb0f, 0xc55e585805c6ba2b, 0x24de170628f45844]),
        Fp::from_montgomery_limbs([0x7d2f14a972596020, 0x25598c4cbaff106f, 0xf1b85b36a6c4eec3, 0x0221cef872b1276b]),
    ],
    [
        Fp::from_montgomery_limbs([0x74b55ec567cb4bc2, 0x88ebdeb661625919, 0xda45d130e5b94072, 0x0bac3af692f44d01]),
        Fp::from_montgomery_limbs([0xbd0bf5eeedcd88cc, 0xcea3d23dda460c47, 0x1efc6fa62989900a, 0x35d33094b65ee7e1]),
        Fp::from_montgomery_limbs([0x794e1b587be916e5, 0x3fc7db6213e21c3e, 0x140a377c6a114bb5, 0x3e642296934abcd0]),
    ],
    [
        Fp::from_montgomery_limbs([0xdaaa3b58bc89c862, 0xa81afd55820a084c, 0x08477ada7400b574, 0x1b619e804f8c623a]),
        Fp::from_montgomery_limbs([0xabdd448f58412ce4, 0x3a60413b95378944, 0x8cb4ca1c25f3eb30, 0x2b0891386cbe8b2a]),
        Fp::from_montgomery_limbs([0xa5632557ecbf717d, 0xcb76540624cbf599, 0x2ec94af47d4034c8, 0x1848d5e9dda8b413]),
    ],
    [
        Fp::from_montgomery_limbs([0x86fab4115b37fdf1, 0x419e3702c9922932, 0x5fa3b4a7e4df4eba, 0x19a718eef222d80a]),
        Fp::from_montgomery_limbs([0x52f3b586206862ab, 0x80bf9e54a6a09673, 0x8fdb35752f31bb1f, 0x36ae019c1f29e82c]),
        Fp::from_montgomery_limbs([0x9e6582928a54325b, 0x033664ab983ae344, 0xbc612a8e2bce7c44, 0x179bb1f55c2cc2d6]),
    ],
    [
        Fp::from_montgomery_limbs([0xd626f1c9f4af939c, 0xa75b9d06d20fdc22, 0xb893f89052e695c0, 0x04752250f7126112]),
        Fp::from_montgomery_limbs([0xf59458a4b5fa023e, 0xb7fb72fe55ab851b, 0xdc21f7954c9796f4, 0x0fec9da9bdc4b4fb]),
        Fp::from_montgomery_limbs([0xb3585709ac8f444e, 0x3d35c7d564711fb8, 0xe2ae9c057138eb23, 0x35c3f58173c0a522]),
    ],
    [
        Fp::from_montgomery_limbs([0x439b8846f90a8856, 0xa964618d940609fd, 0xa07a9ff20ca379a0, 0x094ff348b3a6d4d4]),
        Fp::from_montgomery_limbs([0xd14391ff8a8f3836, 0xb921a251ff2dad87, 0x520736798fc8d2d6, 0x05bbb550ea368a06]),
        Fp::from_montgomery_limbs([0xf196cca720ebc748, 0xda608ebff2be9cd6, 0x97cfb8f85c54b7a9, 0x209b9d1605944b27]),
    ],
    [
        Fp::from_montgomery_limbs([0x3333c7a5ef1b19dd, 0xd03c0fe0596da886, 0xd75cb54fcf503a06, 0x3ccd8fd9de0c2c79]),
        Fp::from_montgomery_limbs([0xb595f21eece4f1c8, 0x054987766fa453fe, 0x8d675fe5195c5c2a, 0x13afbec1b578a8b5]),
        Fp::from_montgomery_limbs([0x6a06f00bb0199dbd, 0x7ff203687c4894ca, 0x3612ac796ec9d1ab, 0x1a7cbb6ebd777d9e]),
    ],
    [
        Fp::from_montgomery_limbs([0xa335ae693a756223, 0xfe73c50034d23ba7, 0xb6c6f08144f04ac8, 0x27e699dfa225d159]),
        Fp::from_montgomery_limbs([0xb631edfb8f283882, 0x94d24cd68694caf3, 0xb94bcafffcccdc49, 0x307d6a3a5c11cfad]),
        Fp::from_montgomery_limbs([0x697feec9505fe943, 0xa991c60d93e1ddee, 0x871476b2e2d5e90e, 0x244d9be2764303bb]),
    ],
    [
        Fp::from_montgomery_limbs([0x3a02f7f52a469836, 0x9aafb6bebf42409b, 0x2a2edac0a87ad610, 0x33c4d8d7ad92ce08]),
        Fp::from_montgomery_limbs([0x65cfd8fff870cb54, 0x3c7fdc39fefdcf64, 0xce8a75260eddfc18, 0x0a10ab2a36a99ee3]),
        Fp::from_montgomery_limbs([0x1becc0bdf5a4db67, 0x48689e179f5ba62b, 0xc97c6afbe29e7248, 0x2e4d3fd0597a39e3]),
    ],
    [
        Fp::from_montgomery_limbs([0x9b8ba2ae8d2b475b, 0xc1c04b6fa9722844, 0xb152ddffdd3d8555, 0x37e2930abf08a28a]),
        Fp::from_montgomery_limbs([0xb00de7ac1a468d11, 0x6469ccd92a2fbe04, 0x4cb8b9787ae3960c, 0x149bc4da1b2a864b]),
        Fp::from_montgomery_limbs([0x8c470c68ed5f6323, 0x2841224afb10a872, 0xf5391163c56ba0e9, 0x22fe2026eb4d5c08]),
    ],
    [
        Fp::from_montgomery_limbs([0xd4ff70ffbee44e3b, 0xfa55f2736c6ef2c0, 0xe807324d80a09b01, 0x36f2acd2497c31fd]),
        Fp::from_montgomery_limbs([0x94ee645bc077ce89, 0x3658c1e2c408336e, 0xfb6251c4148cbbe7, 0x1aa0195923afdf3c]),
        Fp::from_montgomery_limbs([0x0cc8ce0d8fb98034, 0xcbb44c571622edbe, 0x1611414de24ead5b, 0x136b0d48f05c51fc]),
    ],
    [
        Fp::from_montgomery_limbs([0x25feccfbbadc8a48, 0xf329c94655a8ee37, 0x8ab8aa549aa2d713, 0x0d68012caecc622b]),
        Fp::from_montgomery_limbs([0x644f3f15aef8f654, 0xd7f511ef9f31f90b, 0x0bbff00024d40021, 0x24ffa288f6c55bd0]),
        Fp::from_montgomery_limbs([0xf34629f14006f4a2, 0x48c0d5008fbf0c34, 0x2901b8bbf143f777, 0x2178fc8b31d7f131]),
    ],
    [
        Fp::from_montgomery_limbs([0x5580c31932a77296, 0x6d065dbd9e80ab9e, 0x959eac061ff0b9d5, 0x3953babc5c0ae91e]),
        Fp::from_montgomery_limbs([0x203bc6f89e7bb3a4, 0xb5e07335c2a749a3, 0xb7e027f8be624b98, 0x00566079300ff9e7]),
        Fp::from_montgomery_limbs([0x26e718a0399d889c, 0x3e329051f9becd05, 0xae02ef302cb533ba, 0x3ab45a98c9ab312f]),
    ],
    [
        Fp::from_montgomery_limbs([0x3fc7b6612e78b463, 0xeeb3f32beaf92726, 0xc81dd1706d8587db, 0x2ac0860daec5ca8f]),
        Fp::from_montgomery_limbs([0x37399fc28d287ab2, 0xd665f3994a71ee90, 0x254cb93cf94e496e, 0x25ce309f1657b3ec]),
        Fp::from_montgomery_limbs([0x572f8af69914e6a2, 0x69282900a595471f, 0x8eeb450de92c19a0, 0x365576f510dd0c21]),
    ],
    [
        Fp::from_montgomery_limbs([0xe30808d13a89a395, 0x5abe381be4150af0, 0x365172a05f15412f, 0x06de023634614eec]),
        Fp::from_montgomery_limbs([0x8e54d10364a84173, 0x14b626229fb5eeac, 0x1ffcea28c965db79, 0x3a942f65ac2115ef]),
        Fp::from_montgomery_limbs([0x8d421fe4e4ad0b7a, 0xc9afa6114fcb5141, 0xfa7f09b86f5292db, 0x01e4ddad14adcda9]),
    ],
    [
        Fp::from_montgomery_limbs([0x43c789a08a4c6c72, 0xbc69aa199746be03, 0xe1d4fd575693d191, 0x20743ecafb53e792]),
        Fp::from_montgomery_limbs([0xf588710195b8cc38, 0x238c27e1dadc54a8, 0xb71cbbd549925d08, 0x21433de3a74789c4]),
        Fp::from_montgomery_limbs([0xb731b8847d4151c9, 0x0aa74ee261ea73c5, 0x01a215c55b986e28, 0x08491d1bcd9bf763]),
    ],
    [
        Fp::from_montgomery_limbs([0xa56d4cc9aa8789dd, 0xfeb1457c7c9fc726, 0x04c90d88041a1086, 0x3f0c4a0b4d2b3f43]),
        Fp::from_montgomery_limbs([0xe9a664f0983f4006, 0xd2a5f32ff024ebe3, 0x7bd5b129a621b1d8, 0x00eada0316239b27]),
        Fp::from_montgomery_limbs([0xbd79071411d68bc0, 0xd8be89a29f40126d, 0x84bf7419a39a8606, 0x2cdce1fd3c39dc72]),
    ],
    [
        Fp::from_montgomery_limbs([0x63f1726ea194b523, 0xe2402359b3f1dbe7, 0x229a7d8be081b017, 0x091c452cfd193f7e]),
        Fp::from_montgomery_limbs([0xab10516c42256656, 0xaf62e0c22878be4f, 0x9a87b33e6cf090fc, 0x1bc2cac8fa317d3a]),
        Fp::from_montgomery_limbs([0x7d2326764f103b32, 0x47700f54a0f65d58, 0x84b550ebdaeb85b9, 0x2ce8f81e80e2b41c]),
    ],
    [
        Fp::from_montgomery_limbs([0x9656eb032596fbca, 0xa7becd1b95abb59e, 0x975b0b0001374851, 0x1002cbe7ce4dc7b3]),
        Fp::from_montgomery_limbs([0x043eda0ed157305d, 0xc7d4e0a83892267a, 0x49119a589822c0d8, 0x136fe1933a4681f6]),
        Fp::from_montgomery_limbs([0xc75299d024ae4e3b, 0xc3258ef425d9fb42, 0x6dbff36ea14e9556, 0x138fb16e86b89492]),
    ],
    [
        Fp::from_montgomery_limbs([0x3b69a8d3dac9c645, 0x01838fc37f43144d, 0xb1b1a5900d9a7128, 0x28bf8f296581d5e8]),
        Fp::from_montgomery_limbs([0xe7d847e256c1d92a, 0xe688b873e63c137b, 0x8503deb92043acbb, 0x2c23a29e8033f55d]),
        Fp::from_montgomery_limbs([0xc0499df57ad54b05, 0x66a1287f34418f33, 0xd3522d4c9e4c7dd8, 0x0feec01acd10d871]),
    ],
    [
        Fp::from_montgomery_limbs([0x81ddd5f8d5ded781, 0xe113345f88ab009f, 0x7cb9406891a3cfae, 0x182d84d1e443a3cd]),
        Fp::from_montgomery_limbs([0xa2a5767897a62914, 0x4020c02a32ee00fd, 0x1a0feb6c8f0ee509, 0x339300591989fd65]),
        Fp::from_montgomery_limbs([0x4f70ac87b3a0990c, 0x28b79a7437ce2581, 0x5754aa0d80e279c6, 0x3445acc5c311037e]),
    ],
    [
        Fp::from_montgomery_limbs([0x73b7ab5a28343f91, 0xdf15af2a9e055e2f, 0xd5c77399aab866b4, 0x34bab574e77cc038]),
        Fp::from_montgomery_limbs([0x41bd37628236fbcd, 0x2aae204e559d49af, 0x489f89ff142603ee, 0x196e7ec94fd71048]),
        Fp::from_montgomery_limbs([0xcb8edc7ea428c90f, 0x2d2e9efec636b3ea, 0x91873ac8d7f7c8f5, 0x1795e78a6ac05932]),
    ],
    [
        Fp::from_montgomery_limbs([0x554dc29d667cb596, 0xa42aa80813a65752, 0x06a461f8a522937e, 0x36e0cb5caf369926]),
        Fp::from_montgomery_limbs([0xa559d05870a06b4b, 0x6b2577c5c79e8b92, 0x769872aa3785cf41, 0x2402bcd7abaac214]),
        Fp::from_montgomery_limbs([0xaa6c7713b611aa3f, 0x443aaff299191a2c, 0xc189e3269850f2da, 0x1bd4e46533eebd68]),
    ],
    [
        Fp::from_montgomery_limbs([0x60553833251a21c9, 0x4e9250e0bb835fb5, 0x38d4b98b4621a37b, 0x22b9bfb0a5cc909d]),
        Fp::from_montgomery_limbs([0x3a55d87f2c47026f, 0xc38688565ef004b8, 0x8722cbfd44bfbece, 0x3f2408fe21c3fda8]),
        Fp::from_montgomery_limbs([0x1a45866ebea77063, 0x2b8ad974a1c94fea, 0xf28edd2ddf6f28f4, 0x01a232015f94b854]),
    ],
    [
        Fp::from_montgomery_limbs([0xa52323bf368074b5, 0x16434f5929de2219, 0xc3c266f1f25cfbd9, 0x2409604e1fad3393]),
        Fp::from_montgomery_limbs([0xa4ca3ee986c3deda, 0xdf0affd111053f33, 0xc096b6260f47588e, 0x0f902cd89833adf2]),
        Fp::from_montgomery_limbs([0x1e10bf1951efe24b, 0x92b73918deb7d5be, 0xa4df43535cd220fd, 0x07d4f2ce6fd6cbdf]),
    ],
    [
        Fp::from_montgomery_limbs([0x0c0bd92332506488, 0x5c2bf0fa783f6b2f, 0x6cb0a467473af090, 0x06913bdc4c73b88e]),
        Fp::from_montgomery_limbs([0x5ef8d88810d09d05, 0xb246f8174216ee36, 0xa74e939dc4740083, 0x3926d6c9602d3ba2]),
        Fp::from_montgomery_limbs([0x91197a84f816afcf, 0x699a353b3c8ffc3c, 0xfdd7183cbdc2874c, 0x236f15cdd40f9554]),
    ],
    [
        Fp::from_montgomery_limbs([0x3d7b82005e7e2306, 0xbdaba71a8905b454, 0xb3a6e1d5b335e505, 0x09709083aa6376e4]),
        Fp::from_montgomery_limbs([0x8a038b991bad0103, 0x2bf2e198e03a4ad9, 0xd46c3860339eadf1, 0x3f8593b8bccf2614]),
        Fp::from_montgomery_limbs([0x6641c9f383ab88ff, 0xc1539087f35afafd, 0x9f809f762f7d5705, 0x0112ac86c21dca29]),
    ],
    [
        Fp::from_montgomery_limbs([0xc4189b64d7e51434, 0xb71a18b0cf3c0468, 0x877452e88d26a1af, 0x04e0899ed6976d80]),
        Fp::from_montgomery_limbs([0x4d97f3bea029fcab, 0x3b3f881bd89d9553, 0xaa130101b05d2db2, 0x0fa7b66927982458]),
        Fp::from_montgomery_limbs([0x652fde4279da4847, 0xa0da257042bdfd1f, 0x3d40a66f50011a5e, 0x3938fcebb3079d9a]),
    ],
    [
        Fp::from_montgomery_limbs([0x29a37444f65c0f00, 0xe7d6914ec52f3dd3, 0x97716428df4ffeae, 0x268d63a61fa6f0ff]),
        Fp::from_montgomery_limbs([0xe87719286cb7af70, 0x2753f01a8668d712, 0x6a6aa43e4098fb6b, 0x0cb1992f329b4588]),
        Fp::from_montgomery_limbs([0x1aabb02bd0d7c208, 0x196e2adb9632cf24, 0x338c6239fbb1f7bf, 0x23a3c4b8ba149e1b]),
    ],
    [
        Fp::from_montgomery_limbs([0x1750241ca2fe5663, 0xbdc3678b90446ba4, 0x35cfa82cd46e345a, 0x03f6a3eec9aa68f5]),
        Fp::from_montgomery_limbs([0x9ee2a6d93d09b79b, 0xa5c11c2b9cddae7a, 0xe793e7e6f529744a, 0x2b48a6b3d4a89f10]),
        Fp::from_montgomery_limbs([0x251117ed80f7d6a5, 0x938cc12a9f4842d5, 0x8e23c6ad8006a69d, 0x2fd304e1492b8e27]),
    ],
    [
        Fp::from_montgomery_limbs([0xdd5be6ea7580d114, 0x9b9dfd77c71ba7de, 0x79670f6bc83af0be, 0x15a2f3345bff3fad]),
        Fp::from_montgomery_limbs([0x043b4d0008c02604, 0x5dfca33d17227a12, 0xf297e4c04042eb9b, 0x08eb1c9c3524748c]),
        Fp::from_montgomery_limbs([0xa09a48ada38e402f, 0x4e6b1e9366164f24, 0x8d540b8a1aab8fd9, 0x05314e514fca8921]),
    ],
    [
        Fp::from_montgomery_limbs([0xc3512b88fbbbc60d, 0x6238b9408347f904, 0x21a5f493dae5df6a, 0x10468611d4533c89]),
        Fp::from_montgomery_limbs([0x0d206cc16dc008b8, 0x4d02335f68e7f998, 0x34d2cb2fa0f66c66, 0x277d14f420fe7bf2]),
        Fp::from_montgomery_limbs([0x5bc92cc4a1409770, 0x8148f39ffae13a3a, 0xfe911639863120fc, 0x3545b0301b356cd9]),
    ],
    [
        Fp::from_montgomery_limbs([0xfa11bd56f8b9ad3c, 0x9529b5a595466dfe, 0xfa22fbd281d232ce, 0x1434de9409ed06e1]),
        Fp::from_montgomery_limbs([0x271c78687f13847b, 0x80627bb23bc27acc, 0x0749b4283f7f748e, 0x15c16b21c805b487]),
        Fp::from_montgomery_limbs([0xb3b011c35ea11ecf, 0x952b56d75d3ef31b, 0xf96cec3d0f42779f, 0x0c43c5f69f0f3fa1]),
    ],
    [
        Fp::from_montgomery_limbs([0x8fa531a43455ac86, 0x7fe52d264293b2b6, 0xb296eaa8a65b204a, 0x1577f9a9def3302e]),
        Fp::from_montgomery_limbs([0xb47bff1615a5952f, 0xa080550261726059, 0x18954d896a21a7e1, 0x00fb9a5ad5ded58f]),
        Fp::from_montgomery_limbs([0xc6603978337a89f3, 0x5a4be1d4d713242d, 0x050412ec2497e344, 0x23e07add1a6ece44]),
    ],
    [
        Fp::from_montgomery_limbs([0xcf6a2f15458d5c6a, 0xb682066706d14c09, 0x38a8fa8d9e9a4d96, 0x37fed0c045f40da2]),
        Fp::from_montgomery_limbs([0x36e081602c7c348f, 0x00749bc35f75743d, 0x97857adf1ded2792, 0x3fb23db0e1675339]),
        Fp::from_montgomery_limbs([0xc521e798bb901b71, 0x9a675a70de86d740, 0xc0d2e89d0800c65c, 0x04c439fe791b3f0a]),
    ],
    [
        Fp::from_montgomery_limbs([0xff3c6a19e1fe4481, 0x82685cfa7d897caa, 0xe34039c237ec2dd4, 0x0c9dbeae565a609b]),
        Fp::from_montgomery_limbs([0xb643cffd20d83c70, 0x8580e8ac3f30a59f, 0x183212b9a6671cf1, 0x0e9cbb399f315fc1]),
        Fp::from_montgomery_limbs([0xeefdee0ca1a0aeeb, 0x5e2a8b11318a6380, 0xc7b037883df5249e, 0x2332f222d3d612f4]),
    ],
    [
        Fp::from_montgomery_limbs([0x64b37a5e1d7b5bf7, 0x6fd7e47ef1b45e97, 0xe6dfa3f1f4452c29, 0x0766f5fbdf1209d1]),
        Fp::from_montgomery_limbs([0x09224322f0776a2f, 0xf5c8f4a65a02ccc8, 0x6703bb25a69576d5, 0x07999d99e3d3a093]),
        Fp::from_montgomery_limbs([0x6d66e680724e7d33, 0xe327dd1d8a24a958, 0xdbaff76b78654449, 0x0e17644a07c46f01]),
    ],
    [
        Fp::from_montgomery_limbs([0x61a7a290a48868d0, 0x666e1a3ab6c432ea, 0x549735a21e976fff, 0x206ad3b1d41fffd4]),
        Fp::from_montgomery_limbs([0x8bcae7ead906acf1, 0x0b49a8309ba7199f, 0xae60e674c2536af9, 0x237ab6ca7da79d74]),
        Fp::from_montgomery_limbs([0x9c3619c8f16a6cc9, 0x58080e30f8e4afcb, 0x65917c7ff50524d1, 0x3e75ded1a87f7740]),
    ],
    [
        Fp::from_montgomery_limbs([0x14772426fd97b972, 0x941d060781959623, 0xd722e852e6aede9c, 0x3d6c56016d00d614]),
        Fp::from_montgomery_limbs([0xa8684da6ed135fef, 0x1ed08bf038e1e4cf, 0x6c54007c76bfd5ca, 0x26d2a648dbec7842]),
        Fp::from_montgomery_limbs([0xa0138831962cf929, 0x7f918116f10b5be4, 0x80d3b7dab58a171b, 0x13703f3b9b0c401b]),
    ],
    [
        Fp::from_montgomery_limbs([0xc8e5cefe3131792a, 0x0577694bc7277044, 0xdf942565ad8abfb8, 0x071c609f221030b4]),
        Fp::from_montgomery_limbs([0x69fbdce95851cd43, 0x569680eceb989dcc, 0x04d6e6c2116d70e9, 0x2e1494b59b571be3]),
        Fp::from_montgomery_limbs([0xbd39dbb1aca9d97a, 0xd04e431217e14e95, 0x8f5b49aa9dbb227f, 0x0c3c65c2b2a63c83]),
    ],
    [
        Fp::from_montgomery_limbs([0xb1aa46242e83998b, 0x1813f4d56934c890, 0x29ffce872d994a34, 0x2b0ba6175d433da9]),
        Fp::from_montgomery_limbs([0x36af6e07260f2a8c, 0x6fb78f1e8240c057, 0x1ac0a4c0029e5767, 0x298e2c285b83f72d]),
        Fp::from_montgomery_limbs([0xb5c26ac56caf9e4e, 0x4909e6a05d46806f, 0xcba989da996adddb, 0x3dbd9601be20e87f]),
    ],
    [
        Fp::from_montgomery_limbs([0x00e627a69db0e0ff, 0xfde11cd6386ff0c2, 0xa42c304aeec3939b, 0x341da3729eb935d2]),
        Fp::from_montgomery_limbs([0x11813c417f9b8c9c, 0xcd3269c79efabc21, 0xd4577e8ea3460517, 0x130ac56851e3b1b1]),
        Fp::from_montgomery_limbs([0x5739e5b8a5871c10, 0xfbf8a181695a1c2d, 0x33ea032e516283e8, 0x3bd5f73f042d6772]),
    ],
    [
        Fp::from_montgomery_limbs([0x37b21ac5124c2116, 0x9e5c0cd4bd207fae, 0x8cb8a843c2e4a3b5, 0x1d6ba515e17f6b11]),
        Fp::from_montgomery_limbs([0xd7e46441ea526015, 0xd745c9d99fcc3194, 0x9e6e6aceb623db64, 0x03e0a3126822c623]),
        Fp::from_montgomery_limbs([0xb4f7ca87f324d398, 0x6c629979613f3f25, 0x4a84ea1e043a36c0, 0x3667d4dc3568e659]),
    ],
    [
        Fp::from_montgomery_limbs([0xc61a26fda4181420, 0x40dc60e68acf0ebb, 0x14f9ba264d46d811, 0x2dd498967961095a]),
        Fp::from_montgomery_limbs([0xec4ee62e52e0f57a, 0xee178f8ef74153d3, 0xd21198c1da0fa596, 0x1639a2bb7510ce60]),
        Fp::from_montgomery_limbs([0xadc4517653957f5a, 0x0fbdeeab6fc03c5b, 0xe58a8653404c1fa9, 0x2e5023d266eff069]),
    ],
    [
        Fp::from_montgomery_limbs([0x9679acd1a4b10694, 0x49eb167111c8d383, 0x37db64e35bfbc2a6, 0x0891bdce2c5f3751]),
        Fp::from_montgomery_limbs([0x1662f607cb438f23, 0x6148899be3786636, 0xa9ca25126a3a6254, 0x35e7b842c7ceddd6]),
        Fp::from_montgomery_limbs([0x8ec4ecf3d7a0d2eb, 0xfb7779566075ee11, 0xc8a16af331e00714, 0x179895911fdecf01]),
    ],
    [
        Fp::from_montgomery_limbs([0xdc070ab2f015e897, 0x61789049b4ff989f, 0x0f52f2c01245f642, 0x347f1433cd87b11d]),
        Fp::from_montgomery_limbs([0x6bed12bc0ca9de00, 0x0fc04210378f8af2, 0xeae682d4e9b7677d, 0x20111649f75a9fdf]),
        Fp::from_montgomery_limbs([0x4017c8e6c0b6da46, 0xd0be657ada7107f2, 0xc78ea519643e27fe, 0x02bde3acfbaae87a]),
    ],
    [
        Fp::from_montgomery_limbs([0x90e31558b34373b3, 0x709bcb6e60d3e7bd, 0x32a31cfb90e910f4, 0x01730591afeda602]),
        Fp::from_montgomery_limbs([0x0ae4ce4f704d0500, 0xda0892ac6e58d44b, 0x38d14e4a3c1e6de5, 0x0c4d5b80b3ee538e]),
        Fp::from_montgomery_limbs([0x94382ce1586b2ffd, 0xa2724640c1ef30dc, 0xa0956adfe16e8bc1, 0x3d4c223e9c3a9500]),
    ],
    [
        Fp::from_montgomery_limbs([0x140c00ee586b0774, 0x1406d9594dcdd83e, 0x30ba303e16759b23, 0x111c17bf187db189]),
        Fp::from_montgomery_limbs([0x04c08713267d66e2, 0xc7c1d11cb68c5ccf, 0x142e067aa098af19, 0x08ecba3b8f6f8827]),
        Fp::from_montgomery_limbs([0xfe76716f12020032, 0x95723b69892a4a76, 0x5ff8a1e208eaab65, 0x36fb6c8430b1a8bf]),
    ],
    [
        Fp::from_montgomery_limbs([0x11b440c7c4e6bb88, 0x4df792de47be2a18, 0x0ce578ab2f877bbc, 0x3bd222eedc750106]),
        Fp::from_montgomery_limbs([0xe2a5c3a990040e7f, 0x564a5e66e59e21c5, 0x41e5734cddf8774f, 0x0a01384c1d6d4035]),
        Fp::from_montgomery_limbs([0x22774d38ed696237, 0x8e4a4641f4fc77f0, 0x04a24ea4e787ad61, 0x3dfb1aada69ba383]),
    ],
    [
        Fp::from_montgomery_limbs([0xcfe20a68c39b8bf4, 0x45fe8898d439a325, 0x9737536d32b68ec5, 0x0f70b390ea35bbb4]),
        Fp::from_montgomery_limbs([0xc8942db5bb70242b, 0x452db8ca8066afb5, 0xf5505eb869524c6c, 0x2926519a6dcc5802]),
        Fp::from_montgomery_limbs([0x00c129388d03dcd5, 0x8bb6d1c910603ad8, 0x76e836c172b23103, 0x090c584ab33b5a44]),
    ],
    [
        Fp::from_montgomery_limbs([0x969978b4b3e869c0, 0x3bfa5a05a3bd60ef, 0xfaf8eb89cd54566b, 0x0c7be8e3152efa7a]),
        Fp::from_montgomery_limbs([0x5bff9a74994ffc9f, 0xa88ae3ab157ea624, 0x5e464d5a6ef75b3f, 0x1e39bb1f6f5ddea2]),
        Fp::from_montgomery_limbs([0x8887d112c0ad08eb, 0xfe738a0948c7df46, 0x6f4350f4ca5a484b, 0x31e28871bbef2d42]),
    ],
    [
        Fp::from_montgomery_limbs([0xe2bfd0a2d9840dc1, 0x89d559338d9f4656, 0x7fa438745912099c, 0x1abbaddae76312ae]),
        Fp::from_montgomery_limbs([0x27dfd0a68f09ef57, 0x7aa9a3257786a507, 0x99c1aad4026432b7, 0x1ee745038b512fba]),
        Fp::from_montgomery_limbs([0x26e7f1828b86b85e, 0xb177d7fd5fd81ce7, 0xcaec64f5ef8f1d37, 0x0fbea4e9d96ca75f]),
    ],
    [
        Fp::from_montgomery_limbs([0x85aa1f2d6998a98c, 0xa1a87d153453ddf9, 0x5bc443d1af32e401, 0x1dba9d893ed27e63]),
        Fp::from_montgomery_limbs([0x8888645c118c73c7, 0xd7c050d6d63146c8, 0xa2e00c676f80a64a, 0x21ce0e7965099d5a]),
        Fp::from_montgomery_limbs([0x8a81ee80e17d0fc8, 0x7c7f8410d656baaf, 0xce08ee38e81f585d, 0x23b4973c726f516f]),
    ],
    [
        Fp::from_montgomery_limbs([0x2b2bdd3b5d199adb, 0xf08f26564385a708, 0xa413ab39c49827fe, 0x10128bc4a3efbc6a]),
        Fp::from_montgomery_limbs([0x56d94360bc9cb979, 0xde92ab1d0397f2a3, 0xec376db17cd78645, 0x2683cc10221bf858]),
        Fp::from_montgomery_limbs([0xc5ea8875c470a8bb, 0x5604fc9173fff993, 0x74532edc859da025, 0x379f5ea5727e8aed]),
    ],
    [
        Fp::from_montgomery_limbs([0x7463235e61b41f98, 0x6cf40c0594d917a4, 0x7edb039d43e7ba2f, 0x04daf6a15e4e8199]),
        Fp::from_montgomery_limbs([0x2d943556f73e995b, 0x1869a0656e887853, 0xccd4a6d2d6cb3525, 0x2692fd83bd3f292c]),
        Fp::from_montgomery_limbs([0x8331d85789a18927, 0x3e91aaa47eb61dfc, 0x1db953a2266fe0e3, 0x2f5e21047b383d21]),
    ],
    [
        Fp::from_montgomery_limbs([0x4f4d72b3013fdad0, 0xc2f5c19cda5c0c06, 0x5e0ecd2c7f07f6e8, 0x14412fd982101f89]),
        Fp::from_montgomery_limbs([0x47dc9f5b404a55cd, 0x3ce655163284959f, 0x8c3393cec3d242ea, 0x0bb64b8246c77624]),
        Fp::from_montgomery_limbs([0x1a972cd56d785932, 0x680b24ad1a02202d, 0x790635c8996f9742, 0x2e044fcbc7370b9c]),
    ],
    [
        Fp::from_montgomery_limbs([0xe122ddc413e839bc, 0x46f74d5a811e4e40, 0x3ebf637357f1e349, 0x0f545fc222ae5155]),
        Fp::from_montgomery_limbs([0xac2d6c583ec3e1bb, 0xb6a684cc58845ff3, 0x16107766f6c30b64, 0x34ed2003b4c5a839]),
        Fp::from_montgomery_limbs([0xbc3ee37e66b2f48f, 0x0f938f18236a45a7, 0xfc67009ed986346c, 0x0881cbbdbcbe6244]),
    ],
    [
        Fp::from_montgomery_limbs([0xb8dacb5f6da5ae11, 0x71a4265e3c5ce886, 0xfb49f01ae927f5ec, 0x071f148e8f6b71db]),
        Fp::from_montgomery_limbs([0x9ebc2fb775f9e5ec, 0xa1d1d97c9e2b4c65, 0x586816e7a718914a, 0x0ae8ec01881749d3]),
        Fp::from_montgomery_limbs([0x6148ef7de4cfc7ae, 0xabf1ccb99ba3be2c, 0xfe5b7bbeccd57d28, 0x09ad0dad5c5eb139]),
    ],
    [
        Fp::from_montgomery_limbs([0x3449b6bf9acfb04a, 0xcb689d9b042af14a, 0xb59937e07df7345d, 0x0d45e96c8d5aed1c]),
        Fp::from_montgomery_limbs([0x0cc04c81de951568, 0x9573956f83afece4, 0x165a86c92e045020, 0x39700e1b9dff18a2]),
        Fp::from_montgomery_limbs([0x2636288ca706e0a0, 0xff239b1a83c8d89b, 0x23268c32ae057d29, 0x3b21005481abc30d]),
    ],
    [
        Fp::from_montgomery_limbs([0x587d0d3f8f6bc8ba, 0xb5918ac985dc4efd, 0x18f715aaa700272a, 0x0e1bcf99dcf6cc18]),
        Fp::from_montgomery_limbs([0x6b0c2ec83c1a5bf0, 0x40a6b215c4b3eb36, 0x719fd8b5c03cb27b, 0x3baaa626067ce944]),
        Fp::from_montgomery_limbs([0x3d489097da1630d4, 0x97a476442e49730a, 0x13e31d5930e567d4, 0x33de373669abddb8]),
    ],
    [
        Fp::from_montgomery_limbs([0x1edb8dfbacbda757, 0xed4a142d9ef7d2a6, 0x0c6ac330d33ecd02, 0x0a5afb3c0b4b023d]),
        Fp::from_montgomery_limbs([0xf47151aab2dd8ee6, 0x4afb1d8c28f0e3e6, 0xb62ace1f723e000a, 0x0f75161b9b38255d]),
        Fp::from_montgomery_limbs([0xb6ae7c95389a8143, 0xa5da6eaa262945a8, 0xd99b6d6218bb8a80, 0x0e4509d4eb1bf75a]),
    ],
    [
        Fp::from_montgomery_limbs([0xa0356740ef2622e2, 0x6057023b1aad257f, 0xb8778f9a18bf6303, 0x32ed75c12d638042]),
        Fp::from_montgomery_limbs([0xa8bff32784ba73f9, 0xc4ccded75a85ff46, 0x1fc2d9a5b1d1dbb4, 0x06d0c25c0b7a0b5c]),
        Fp::from_montgomery_limbs([0x107be3af8d413ff9, 0x962823cac2abe099, 0x5b6dc50b08ecef30, 0x12224d7d3c7cd410]),
    ],
];

pub(crate) const LEGACY_MDS: [[Fp; 3]; 3] = [
    [
        Fp::from_montgomery_limbs([0x2246450655555555, 0xf4932256a791024c, 0xffffffffffffffff, 0x3fffffffffffffff]),
        Fp::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x4000000000000000]),
        Fp::from_montgomery_limbs([0x0a7e7c3e99999999, 0xb83c0a9bfa6b6a89, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
    ],
    [
        Fp::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x4000000000000000]),
        Fp::from_montgomery_limbs([0x0a7e7c3e99999999, 0xb83c0a9bfa6b6a89, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_montgomery_limbs([0xddb9baf9aaaaaaab, 0x0b6cdda9586efdb3, 0x0000000000000000, 0x4000000000000000]),
    ],
    [
        Fp::from_montgomery_limbs([0x0a7e7c3e99999999, 0xb83c0a9bfa6b6a89, 0xcccccccccccccccc, 0x0ccccccccccccccc]),
        Fp::from_montgomery_limbs([0xddb9baf9aaaaaaab, 0x0b6cdda9586efdb3, 0x0000000000000000, 0x4000000000000000]),
        Fp::from_montgomery_limbs([0x8398bdd8b6db6db7, 0xbbc0f148939d4828, 0xdb6db6db6db6db6d, 0x2db6db6db6db6db6]),
    ],
];
