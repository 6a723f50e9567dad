//! Kimchi sponge parameter tables: 55 rows of round keys (applied after
//! the linear layer) and the kimchi MDS matrix. All entries are
//! Montgomery-form limb literals.

use curve::Fp;

pub(crate) const KIMCHI_ROUND_KEYS: [[Fp; 3]; 55] = [
    [
        Fp::from_montgomery_limbs([0xf21ddba1d7d27be1, 0x6dbdac64359e8455, 0xebf236254ab6c619, 0x298333495b9eca03]),
        Fp::from_montgomery_limbs([0x33470b1f4de7a0c4, 0xeb9d02c24518c3b9, 0x7cefd1bf937ccb58, 0x100ef8ea387b131d]),
        Fp::from_montgomery_limbs([0x76fedb942adf8fc6, 0x2d1fd0ab53d0d8c0, 0xd37b76a3c2804999, 0x109547518014ad37]),
    ],
    [
        Fp::from_montgomery_limbs([0x52342fddbe70772f, 0x0671def10fccab9c, 0x6aeaa1555ee2f287, 0x2bb27e2bf668f6b4]),
        Fp::from_montgomery_limbs([0x0cfd2928000b87c4, 0x4d9c8b1783bd931b, 0xca7f04684a228c77, 0x29ac122f45beeb2e]),
        Fp::from_montgomery_limbs([0x8a45070d695e4eb0, 0x11d7cac72dd31a98, 0x084e301174ec8240, 0x283f9de22d2973e1]),
    ],
    [
        Fp::from_montgomery_limbs([0xa4b8da1c8b5ec0c7, 0xb35094306035d30d, 0x08842f39b7d9e7da, 0x15d5ac5db0c3efc4]),
        Fp::from_montgomery_limbs([0x77910abd4217d772, 0x5514b189b770c9c9, 0x920aab731702c110, 0x3d016ec8a8bcb979]),
        Fp::from_montgomery_limbs([0xa353be81b95caa5b, 0xd462a273adca10d7, 0x447601f8505590a7, 0x1be56dc30f28fedc]),
    ],
    [
        Fp::from_montgomery_limbs([0x0bde45f575d52396, 0x6614c32ae7adec4a, 0x7b38c5ea8344d4f9, 0x38c746b82509260a]),
        Fp::from_montgomery_limbs([0x4aa2301a7b2dcfa9, 0x9cac46b873cd1809, 0x4c2cf29fb53bf3ed, 0x0d9e74d3035cab61]),
        Fp::from_montgomery_limbs([0x82a90231dece71ef, 0x50b5b7b4bfee19bb, 0x0c5d36ac51e01857, 0x14bb5d3d37e84d3e]),
    ],
    [
        Fp::from_montgomery_limbs([0xe924bc71a55d70b9, 0xa6b53a1e20849cc1, 0xc6b940ef1668fa91, 0x2a531a220a638424]),
        Fp::from_montgomery_limbs([0xec076a9cc70b1767, 0xeb34b9f5f1e678bd, 0xf3c383b6e08f955f, 0x3be81676babe36eb]),
        Fp::from_montgomery_limbs([0x0416a633af89f663, 0x4f57a35222a6601f, 0x92b84a3f97ae4e4a, 0x1f64810e43c73d5d]),
    ],
    [
        Fp::from_montgomery_limbs([0xf162f92914136c5e, 0xcac38de4ee2a9719, 0xee622c2cdbc87ef1, 0x2344cd2f9c003b10]),
        Fp::from_montgomery_limbs([0x354bbcb0b7920c3b, 0x7536d7adfe3f050e, 0x82d72c9f73549fc0, 0x06c632b8d1e8368a]),
        Fp::from_montgomery_limbs([0xc4d64ae5abffa672, 0xe4e84b31265f343d, 0x10174c1f6d1f21ec, 0x2dfb192f9d4ab4bf]),
    ],
    [
        Fp::from_montgomery_limbs([0xeff68b209adaa738, 0x219e4cfd5858f0b7, 0x67312c0abafacb88, 0x1efd52936be562c0]),
        Fp::from_montgomery_limbs([0x574632eecaec89e4, 0xeb166ac4c63958f5, 0xc748e0228436b7b8, 0x0042ff928795f71c]),
        Fp::from_montgomery_limbs([0xba91b9a0d0d8c027, 0x38e8a87ffe39ccf0, 0x17e0cbd9d22c4346, 0x0241780b3fb3fd05]),
    ],
    [
        Fp::from_montgomery_limbs([0x2227539a8f7dff01, 0x82f470b30dd836cf, 0xa80f601f0950c0d3, 0x0b32cab417e2fc27]),
        Fp::from_montgomery_limbs([0x27e3e10eefd96b5a, 0x55a39cbfd2e6b5af, 0xee55c6bfb11279c2, 0x16fb242962e0498e]),
        Fp::from_montgomery_limbs([0x3022cb19e35c46eb, 0x70f93f972320982c, 0xad44a577d9a0ea16, 0x3b33750e1ef79a2b]),
    ],
    [
        Fp::from_montgomery_limbs([0x26e47ad461e1e392, 0x2998111df73edf84, 0xf79b83e7ca1dce74, 0x3c2e42d01b223376]),
        Fp::from_montgomery_limbs([0x639ae067c5dcdb4b, 0xd403193287b04b71, 0xa0ade7017c957248, 0x3549d2f711f241cb]),
        Fp::from_montgomery_limbs([0xcfe70ba0df9c6b59, 0xc124a0e8d50a0d9f, 0xe1681683ed764484, 0x24267f1e832a121a]),
    ],
    [
        Fp::from_montgomery_limbs([0x8554cdd4d6bbad88, 0xc805c1bc2297ba40, 0xab69e42ad0e5dca3, 0x18267fa1229dbab5]),
        Fp::from_montgomery_limbs([0xac00a9e0fc9bc672, 0xad56f59be7f21567, 0x6567dba4cfb13915, 0x21a973b77d1ec819]),
        Fp::from_montgomery_limbs([0xb59395006df38570, 0x6743a40d397b6269, 0x8b6054a73cb36c69, 0x0c102a23104a0d6c]),
    ],
    [
        Fp::from_montgomery_limbs([0x5a7863b45428d211, 0x38bf608f6bcc8ac0, 0x8c2bcf36a561a566, 0x1b49d90da8b72e33]),
        Fp::from_montgomery_limbs([0xc9377c3e83e364a9, 0x58855770c93d9cb4, 0xab4b81d80b64554b, 0x2255ff00bbd4418b]),
        Fp::from_montgomery_limbs([0x26a6ef19842e75e7, 0x966a70acd9995dd7, 0xe0029f103685e945, 0x2b3a3e97f20c1116]),
    ],
    [
        Fp::from_montgomery_limbs([0x781a449e4f472f0f, 0x7b61981a4d43d230, 0xc31d54a7717f4f0f, 0x1fe9ad749c8dbea4]),
        Fp::from_montgomery_limbs([0x5eb0730627fa11e2, 0x175bda81d2ed1391, 0xc6e4781cc9d01fb1, 0x2db62ab149afb804]),
        Fp::from_montgomery_limbs([0xf0421e1b4d8dce95, 0x822c4278ea65ca91, 0xcb7e47ecdbd14226, 0x394b0794202f567e]),
    ],
    [
        Fp::from_montgomery_limbs([0xec31023628181c6e, 0x526fea72ed08459c, 0x899e8fb6edd2a5e5, 0x394167a0c24b0d6d]),
        Fp::from_montgomery_limbs([0x5c967c8f6ca0ebd5, 0x0313aeb2dc12ba0a, 0x3419cc6706c92e19, 0x2094ab203a79dbaf]),
        Fp::from_montgomery_limbs([0x04d1b7918b33262d, 0x5bdb1a04887f715a, 0xc1f32e613ccd1533, 0x330cde8c2b91a6d4]),
    ],
    [
        Fp::from_montgomery_limbs([0xd083321393673397, 0x0d222d7fa9bcdd15, 0x84f5aca72d817cd2, 0x010a8fac74851805]),
        Fp::from_montgomery_limbs([0xbb84c810fec09849, 0x51a6ff4f0c1d0180, 0x8edf457094bcfb08, 0x0a6371b7a8c4fa1d]),
        Fp::from_montgomery_limbs([0x685c7bf9567567d8, 0xedee49a8b1ae640a, 0x3eabeaa2f7ae2ac8, 0x3cddc67b0b477f52]),
    ],
    [
        Fp::from_montgomery_limbs([0x4a6fc9f93abded65, 0x029da207e0043332, 0x7cd02b8fb92fd99a, 0x3ca6cd8f014b7cc7]),
        Fp::from_montgomery_limbs([0xd6798391bf2d7ea1, 0xd5c755daa21003cc, 0xb82ae8a0ef7dbd1d, 0x246510ab55266a62]),
        Fp::from_montgomery_limbs([0x269503d7dcdfa741, 0x2d528b480e65d25c, 0x7ac61de16f7fa1d8, 0x22531f56d5f92940]),
    ],
    [
        Fp::from_montgomery_limbs([0xcce989f1cdabea6e, 0x300cd3152b5f4a5f, 0x8124771d7e926cae, 0x2e1cdbd91b4e75fd]),
        Fp::from_montgomery_limbs([0xb66cc30390a53f56, 0x5021e9bc5c51ff00, 0x5a979036d5d90d02, 0x0663748b67cb2aa2]),
        Fp::from_montgomery_limbs([0x26ad970bbfdb7fef, 0x281ce49d9566e5e5, 0x043332d0f99eaa1d, 0x319860cd45e8155d]),
    ],
    [
        Fp::from_montgomery_limbs([0xc41845c0f4c53622, 0xd0a2c1f5e8d46065, 0x0ecdc84959665a3c, 0x296abc09d3dca83b]),
        Fp::from_montgomery_limbs([0x59dc597dda114ae7, 0x070e487cf2a5dbe8, 0x1597eeb4c4e2082c, 0x2d27dbadd16d78a1]),
        Fp::from_montgomery_limbs([0xc643056d9feb353e, 0x1668b81d2d65ae5d, 0xb82f784c7040c0fe, 0x0ced8263064a6c9f]),
    ],
    [
        Fp::from_montgomery_limbs([0xbcedeeae74b27293, 0x5627033be8e16cdc, 0xb18f1aa5e37129fb, 0x30986aea8bd1b868]),
        Fp::from_montgomery_limbs([0x9c7287db578caaba, 0x6cc6b67013f67cc5, 0x48ea7820cfac15c7, 0x2c2867da5c262e21]),
        Fp::from_montgomery_limbs([0xf78b98bc61d26f23, 0x70e60d7b7e64c761, 0x697cd5a072bd4582, 0x3d9587b86dd8c8fc]),
    ],
    [
        Fp::from_montgomery_limbs([0x434735afcca8a4a6, 0xa3ea3803086fefa0, 0x808d7d7ad34231cf, 0x31736c4e4f0c3d85]),
        Fp::from_montgomery_limbs([0x900922f8d10665e9, 0xeb379bdb500fb4fa, 0x8af9b6d03d42d8a8, 0x0db5812d1a1ab113]),
        Fp::from_montgomery_limbs([0x35df044a03e1c20c, 0x0bce277878f70078, 0x24ef76b505df2d9a, 0x034b5b2171381be7]),
    ],
    [
        Fp::from_montgomery_limbs([0xd5ade3bc986f9f3f, 0x6779bdaff729396e, 0xe2262683b119b224, 0x3829787e07624f27]),
        Fp::from_montgomery_limbs([0x8e2af8d245d68962, 0x33623c00206a2d61, 0x94d947d20d4d30a9, 0x2dc32a20fbc3ad50]),
        Fp::from_montgomery_limbs([0xef5097ad5b03e4f2, 0x19248602bd7110e1, 0xc2fc27c2087d9924, 0x0e60e813e48adb71]),
    ],
    [
        Fp::from_montgomery_limbs([0x0720080de77a72ac, 0x32266224386bbbc5, 0x476003e830e572c5, 0x3e4c43f695a3d883]),
        Fp::from_montgomery_limbs([0x9dbf667351848bb1, 0xdca46d574592d889, 0x78d21f6423ca1927, 0x174169efc7e109c0]),
        Fp::from_montgomery_limbs([0xdba4070f5abaee82, 0x86e7d9efae0eeab1, 0xd4852ec92beb5be3, 0x386ec3c108d472ef]),
    ],
    [
        Fp::from_montgomery_limbs([0x4b954a1afb5e3cc6, 0x17a60089fbadbc9c, 0x0b6ff5902a7db218, 0x19541bd17a1328f8]),
        Fp::from_montgomery_limbs([0x8f056f2e827ffc00, 0x6ed57c72850b90e6, 0xdebd896279143792, 0x0d4492a4da672a33]),
        Fp::from_montgomery_limbs([0xeda9621ee0a7981a, 0x6f1c64974608bccd, 0x5a099102e81f61f3, 0x0cd2f6757fbea48b]),
    ],
    [
        Fp::from_montgomery_limbs([0xd1259e9fee48903b, 0xb35cf47cb7cdfcb6, 0x7f4e89af6131c566, 0x2fa8d94bd4978ba0]),
        Fp::from_montgomery_limbs([0xc6b31a1c5f1d5c51, 0xee3ee1c34b56a2f1, 0x618e2c8b62330e8b, 0x3c3beb1c136f9b65]),
        Fp::from_montgomery_limbs([0x3925eace4bc9cdb5, 0x2034b6a8c236d53a, 0x43c1541948ed9b76, 0x002632caa5e8ed58]),
    ],
    [
        Fp::from_montgomery_limbs([0x42e6ae559d820cbb, 0xe68faa15ea1a764d, 0x1068056fe47677ec, 0x2a44058b935e903c]),
        Fp::from_montgomery_limbs([0x5a80ee7218e8a6d4, 0xdded16b7d17773b2, 0x6595b1a212361c37, 0x2abe359463d16135]),
        Fp::from_montgomery_limbs([0x85b03e6d18088d41, 0xe70d5427e24d42ea, 0xbd13e8e190e0b36f, 0x3ce3df10af306277]),
    ],
    [
        Fp::from_montgomery_limbs([0xb4e6bb9d69b34bef, 0x0201441d1d4151b1, 0x3ccdf608d39f76ac, 0x22481e5ed99cacd1]),
        Fp::from_montgomery_limbs([0x9a44af93cc2c9a3a, 0xdecdd8e1493873a8, 0x93ebd38be014ef96, 0x084dfae0a2ef8f51]),
        Fp::from_montgomery_limbs([0xa737f05758c02aee, 0xa7811db58b5a47f8, 0x3e5da891b66fedfc, 0x17c2cf4557e6084a]),
    ],
    [
        Fp::from_montgomery_limbs([0x8182219ba91aaa43, 0xbe0e1706e3d7d1d7, 0x199cd34707dfeccf, 0x12a775ae1cd322cd]),
        Fp::from_montgomery_limbs([0x34a4f4ec55265bfa, 0xb48c3ed38aafeb8f, 0x6b98161ead8da966, 0x36cf9c82979623c2]),
        Fp::from_montgomery_limbs([0x3d06d4a507b2e73e, 0x058da9550643537d, 0x5e59a4f11fcdd758, 0x3f78dae52a056773]),
    ],
    [
        Fp::from_montgomery_limbs([0xb27de443393057cd, 0x00edc498a63190a1, 0x7dfc1347742e60a6, 0x20f9977646f3537d]),
        Fp::from_montgomery_limbs([0x245d094a3a6bf635, 0x62f4f575d718071a, 0x9f78dcfff2907b27, 0x14034280affd86d9]),
        Fp::from_montgomery_limbs([0x35f59c087d35d597, 0x8f37f13ea0594667, 0xe2e24122b23a55ad, 0x23b9a8af3c6d851c]),
    ],
    [
        Fp::from_montgomery_limbs([0xb969ee7246483b09, 0x6b142e3aa4435a2b, 0x277c153e819c90f8, 0x1f2b6e9b700e2fc1]),
        Fp::from_montgomery_limbs([0xcb8187deaf8b2aa6, 0x14d6c19c55e6a6f2, 0xd885ce6f5a1dbf2b, 0x2f973838b3ae4012]),
        Fp::from_montgomery_limbs([0x82151d4446fb30a2, 0x983c226b976479e2, 0x081f124470422001, 0x1b6e51326952355a]),
    ],
    [
        Fp::from_montgomery_limbs([0x707ecbda4ee726d7, 0x492c6be2470b3780, 0xe8813db892775a58, 0x21404b903af95a9f]),
        Fp::from_montgomery_limbs([0x6ff91604f1c152cc, 0xd326f483c7a30f24, 0x2a0a3c9278de6fbf, 0x18adbb9d322db9ce]),
        Fp::from_montgomery_limbs([0x2c85d86db91bc97c, 0x9837a96c3ac1baa4, 0x79917bc1df8aa116, 0x20cb3e775cdc9719]),
    ],
    [
        Fp::from_montgomery_limbs([0x2664ba7193d28604, 0x0ae24fc243b75dd2, 0x1f6b0f2715515ec5, 0x12f4c98a79744bb5]),
        Fp::from_montgomery_limbs([0x45b0a40d5460c7fc, 0x52edbd43a48d1065, 0x5dce472e9ed8bf13, 0x3041654cd4742a38]),
        Fp::from_montgomery_limbs([0x5c4dfb8bd1f9d7ad, 0x826581632b2b1406, 0xc5a0ba8328c137f5, 0x377e95a99c9aafe5]),
    ],
    [
        Fp::from_montgomery_limbs([0x9d64ebc3e2887685, 0xfbba0738e9627dcf, 0x07bf5595ebfec809, 0x06ef6a1db4d99eb0]),
        Fp::from_montgomery_limbs([0x8c073fa073d9f838, 0x75db15356ea33e97, 0xaf619da5a89f957b, 0x3f41e4b714cb85e2]),
        Fp::from_montgomery_limbs([0x7683866201983348, 0x3744207bf080cba9, 0xafdf112dc63ec156, 0x00044f69653f40fe]),
    ],
    [
        Fp::from_montgomery_limbs([0x7e056794043e60e1, 0xcf8ef7613918ec79, 0x33c7e61533f34015, 0x0d9d3853932ca308]),
        Fp::from_montgomery_limbs([0xbb62f420f2c31031, 0xb656058938e43b93, 0x937c0cac2207b67a, 0x3742d6cc6b00e7e5]),
        Fp::from_montgomery_limbs([0x8076b2b9381cf159, 0x79572ebe2c5e1f92, 0x3be9451b5c5a8fee, 0x0d32f247855c1d3f]),
    ],
    [
        Fp::from_montgomery_limbs([0x794179e8568a9708, 0xdaf358755a1e1afa, 0x65b4872630d66464, 0x1a91026686a74928]),
        Fp::from_montgomery_limbs([0xbfd512930b2c51ee, 0x355fbbd7c8a51988, 0xf294b80bf8a5ac1f, 0x344f349a12d5efef]),
        Fp::from_montgomery_limbs([0xc538d114bf96f28f, 0x2418073fe89698b9, 0x1c8ee5e7d00f20b6, 0x01d281bd926dfc2e]),
    ],
    [
        Fp::from_montgomery_limbs([0xbcae3e1534558cfc, 0x8b45c3177530a332, 0x64c7f1f5492a5a2c, 0x0a80891a7e95ec72]),
        Fp::from_montgomery_limbs([0x80bcd57687888f72, 0x034f1d9e8416b0d8, 0x9f2fe833a4abd83f, 0x2223a78248841f27]),
        Fp::from_montgomery_limbs([0xb19ddd8761663d6f, 0x96af727730a5c12e, 0x48d2e2f48599b596, 0x1f3722db8ea321fd]),
    ],
    [
        Fp::from_montgomery_limbs([0x6790fb12717e2a1c, 0x127aa1d16165b5bb, 0x55193ee2692bbf29, 0x27100f4447e90e8e]),
        Fp::from_montgomery_limbs([0x6bba0e6fca6c0ba9, 0x60d5d66f3a0b084e, 0x2908c759a8ca4135, 0x2b77dc67b57cca9a]),
        Fp::from_montgomery_limbs([0x3db57517223d7b05, 0x60ad2596589b3c81, 0x866e3c9f9d09a851, 0x00d94c24b5517da3]),
    ],
    [
        Fp::from_montgomery_limbs([0x78b98be406bf2ee5, 0x077445b930e04350, 0x1f76bf9130c5431b, 0x0d6ed96e0ecfb87a]),
        Fp::from_montgomery_limbs([0x93e3f394a4ee3272, 0x3f13f0495ae0b53c, 0x801beaa8092f5329, 0x1ed0b6a9258789cc]),
        Fp::from_montgomery_limbs([0xbf0ac0dba3cfd752, 0x4e82918326e8d23a, 0xa5d3e78e2f298e89, 0x0e9cc65936ca01dd]),
    ],
    [
        Fp::from_montgomery_limbs([0x122edd28c1987d5f, 0xf56c10232feff2bb, 0xc05e4cf7e47d6f79, 0x2b4290055dbf6dde]),
        Fp::from_montgomery_limbs([0xcb99a8bfa7e43cb3, 0x5788838cb417b525, 0x5faeb5838a6e3b7e, 0x2c378dd721a5b26e]),
        Fp::from_montgomery_limbs([0x8bf498ca2004a76c, 0x46f0284be03eb594, 0xaa971904ab83bce9, 0x1a8adb2c5931c804]),
    ],
    [
        Fp::from_montgomery_limbs([0xd5f4e569b500fcf5, 0x1d6dab3ff7718d33, 0x0ad64725d42540ec, 0x213ccee36637ce54]),
        Fp::from_montgomery_limbs([0x0598120c1f456296, 0xd32aa0ea9c20d877, 0x8d9009943550bc87, 0x3aca0379bffdbe99]),
        Fp::from_montgomery_limbs([0x6f565ecfe0fe88d7, 0xd59be3d1f64bca1c, 0x48a0b60eb1f48fe7, 0x38d22d33ed2dcf2a]),
    ],
    [
        Fp::from_montgomery_limbs([0xfa0d1369ef760d36, 0xf34bdbd8e7f58221, 0xf99fda653f6a0087, 0x1cb1e2371a1ecf4a]),
        Fp::from_montgomery_limbs([0x165fbe2418e889f6, 0xc0bbf655976222ad, 0x7abf9440b6a820f0, 0x1012b12ead000e9f]),
        Fp::from_montgomery_limbs([0xd98fe063a5631e85, 0x723945f1a5a8257b, 0x836146669326fe99, 0x390903a02bae6435]),
    ],
    [
        Fp::from_montgomery_limbs([0x7ee4a36abdf5cec2, 0x4bb2cbc917a6f987, 0x4cf841ec90cee938, 0x164f646993ec4fe7]),
        Fp::from_montgomery_limbs([0x36bb4cc2aeed2ec5, 0x3b0a78956343d23b, 0x7cbfa3dc84ec2f7b, 0x1eda101e07690df0]),
        Fp::from_montgomery_limbs([0x1e4ee92ec531d502, 0x220c9527aa134492, 0x68572008fb1592d7, 0x2ce94db8296abe45]),
    ],
    [
        Fp::from_montgomery_limbs([0xea1a525ccba9ca15, 0xad09cc3244cca3a3, 0x9decc2ce18f36f1a, 0x033e68464268be61]),
        Fp::from_montgomery_limbs([0xc639e7dcf622ede0, 0xdaa8bda3a36ae534, 0xa3b54926f9f9c0c1, 0x3c3915a2fed54838]),
        Fp::from_montgomery_limbs([0xd14edf25e39b9fa6, 0xc7d1df153ecb97c1, 0x54e7c49237112594, 0x3cd6f62fce59fd7b]),
    ],
    [
        Fp::from_montgomery_limbs([0xc2a25c58c9bc9e26, 0xf76613fc7f7c3838, 0x7a772e3ba9c6b8e5, 0x0d7e75742c9cf5d3]),
        Fp::from_montgomery_limbs([0x269a76765b1fb2bc, 0xf8a8a992b4ac89ba, 0xef8605eeed74489a, 0x0b3f45e006e760bb]),
        Fp::from_montgomery_limbs([0x76c3fea648bdfcab, 0x6d4756ae4138e221, 0x566932e51c3410d6, 0x2651233caddbcc4f]),
    ],
    [
        Fp::from_montgomery_limbs([0x55b072cf9cd1d35f, 0x895c2266fcff64b1, 0x90ceaf0442790543, 0x3ddc4fc084af00cf]),
        Fp::from_montgomery_limbs([0x955edc1dde61e502, 0x246a57edcdcd1de8, 0x6e88364b8ab009e6, 0x3147ebdd2b7eaf43]),
        Fp::from_montgomery_limbs([0x59bdfe73a3ab5e54, 0x47cf63c26f215135, 0x0f3d0dd46bbf0175, 0x1f34ad65e7f2783d]),
    ],
    [
        Fp::from_montgomery_limbs([0x7efcd9595c50830e, 0xb85e2bd20bb6811b, 0xf20e2a080cd8e09b, 0x305d12ff0d07847f]),
        Fp::from_montgomery_limbs([0x11aa99760c868641, 0x7f08341b45594c3f, 0xd00e419510e5523a, 0x10a2f8686e8c0276]),
        Fp::from_montgomery_limbs([0xb0e7b9fd2565a29b, 0xffd2e7550a5cc217, 0xf9854b09cb3b5238, 0x044a89bddbeeda38]),
    ],
    [
        Fp::from_montgomery_limbs([0xf8a2eb808a3e0448, 0x121d6b6cbcaf9a72, 0xc8e6e0e04b96b1ad, 0x2669a6e2e922db5e]),
        Fp::from_montgomery_limbs([0xc3ef112476d8fa41, 0x1e657b2465cfb79e, 0x32fd3c903723364f, 0x3d5ab1988fdd3ce7]),
        Fp::from_montgomery_limbs([0x9a049e1833d3b8ea, 0x34cc417f85c1e2e6, 0x329b5afa13ffc8d5, 0x3a8bf74968791570]),
    ],
    [
        Fp::from_montgomery_limbs([0xed4121159237dd5c, 0xfc6ec8e01d3b9ea5, 0x6723ec8e648a1dc3, 0x151f2a18b3c82012]),
        Fp::from_montgomery_limbs([0xcbbc973864cbc8b2, 0x5e0e2246478706aa, 0x9e7f90a52a563176, 0x12cf9baa10d077b0]),
        Fp::from_montgomery_limbs([0xc8f65940ca70ee07, 0x0626dbe41eeb5acb, 0xb9a4a0a68e0055ed, 0x3d0c13744b07dd34]),
    ],
    [
        Fp::from_montgomery_limbs([0x6e299e3d229f2b98, 0x4cdf5308ccb6a7c3, 0x014d0b1057e462ae, 0x2d3eeb1f875890f2]),
        Fp::from_montgomery_limbs([0x7086d642a463d8e1, 0x583eabefc306922b, 0xcfdb451a2c977301, 0x13f5e5dbe12383a0]),
        Fp::from_montgomery_limbs([0x7d6a0ca1651b283f, 0xb829b87e1a2e6614, 0xfee9e9f9ccb732a9, 0x35d50edb676a180a]),
    ],
    [
        Fp::from_montgomery_limbs([0x74d03291889fb844, 0xa134350b2b4d0c0d, 0x5865b47a150b8725, 0x3bf3adca9da5a1c1]),
        Fp::from_montgomery_limbs([0x47e97d66a43b9b76, 0x312585e474ad5645, 0xd9372fb4cf4f4c8e, 0x14cbe252d050453a]),
        Fp::from_montgomery_limbs([0x1980b35b3e814344, 0x320e3c742cb88945, 0xc32f3bb4330064e7, 0x3154aa3048068db9]),
    ],
    [
        Fp::from_montgomery_limbs([0x7b4fe4d1cf3befd6, 0xe0337e942d7d9e7c, 0x58c99fde113f7e6b, 0x2f82e075ff9ff1c6]),
        Fp::from_montgomery_limbs([0xaaf6eb3cb4ca5a4c, 0x13ba91411ed5af5d, 0xd0e6c5ba93b7349b, 0x06b86b9170c7822b]),
        Fp::from_montgomery_limbs([0x971eddc19658dfdc, 0x852d12d79bc66b28, 0xb308f820467c39dd, 0x1d0def8b6989d7a6]),
    ],
    [
        Fp::from_montgomery_limbs([0x865adaec7b36ec1c, 0x682505642410a692, 0x71020d66c1cc9733, 0x3e89756989675f75]),
        Fp::from_montgomery_limbs([0xa2ee998586b05646, 0x23b0229e6784f661, 0x2723e72807e2bdac, 0x0af0dfd1217dfcd8]),
        Fp::from_montgomery_limbs([0x5409f202af87161e, 0x4eeb081e03ab8a7d, 0xdb7ebe58e8ad1cc1, 0x183bc7348cacd358]),
    ],
    [
        Fp::from_montgomery_limbs([0xb4f7a384e940bfe6, 0xa1858f1d0b2a2802, 0x5395d9381ffe1f6e, 0x25c5a8b54b5005fd]),
        Fp::from_montgomery_limbs([0x46feded0d92c6dbe, 0x3b1c3309107b09cd, 0x1b34a6e7409b6448, 0x12e1fbea9ee25ec5]),
        Fp::from_montgomery_limbs([0x27f457210c4bd18e, 0xccab1066eaeb5893, 0x492c1cb943fe10c7, 0x3ce0ad9cc90887cc]),
    ],
    [
        Fp::from_montgomery_limbs([0x44b5fb6a7d24567f, 0xe6b9bbd79c8b6bd7, 0xeac7e96eee0b3fd3, 0x20c243908272aef0]),
        Fp::from_montgomery_limbs([0x8006351221f86b08, 0x2af99019f55500a6, 0x6eb6c852466fc4c8, 0x278fb0e35b8669ec]),
        Fp::from_montgomery_limbs([0x75bc45c3ba0ab1e2, 0x20cf5580af5dcd51, 0x93e6f9846a19ddf8, 0x27bba7ff74f3b4b1]),
    ],
    [
        Fp::from_montgomery_limbs([0xc33339469908baaf, 0x079e8cb7dc20a65b, 0x8cb8d9853dc38aa3, 0x3fc4dd5dc29331a9]),
        Fp::from_montgomery_limbs([0x98c2225c097f9d13, 0xe4b915914713bcd8, 0xc36fa1c766b91478, 0x2bbacb9dc55efd28]),
        Fp::from_montgomery_limbs([0x525bbee4d36c2dd4, 0x685caa69542775d5, 0x6bc5ce5d36cf528d, 0x28928d456bb4f891]),
    ],
    [
        Fp::from_montgomery_limbs([0x26387adc272ccf1f, 0x285a5748dc30d283, 0xcc79c3b97178cc97, 0x157d280e35b46a9b]),
        Fp::from_montgomery_limbs([0xc6f0a735593dc674, 0x6bb7f7b0efa1b453, 0xe4373362d69c1afd, 0x11ea710424873030]),
        Fp::from_montgomery_limbs([0x4baeda778ba7f3ea, 0x00e5b1f70ea417fd, 0x4e1b587c22ac1402, 0x34b5f972ca055621]),
    ],
    [
        Fp::from_montgomery_limbs([0x110a2d8eecc18702, 0xa781a653e8308ce0, 0xc887d1e0740914e8, 0x226bff0cf0bf06be]),
        Fp::from_montgomery_limbs([0x4a99a0007b26fa8d, 0xde2e5b6f74e406b8, 0x9276e9ea270490cb, 0x2bdd767c6bc2f640]),
        Fp::from_montgomery_limbs([0x836f1d3eafa53821, 0x0449eec78c28ba67, 0x38d1aa048ddae986, 0x2c1e83f4152f89bf]),
    ],
];

pub(crate) const KIMCHI_MDS: [[Fp; 3]; 3] = [
    [
        Fp::from_montgomery_limbs([0xddb9baf9aaaaaaab, 0x0b6cdda9586efdb3, 0x0000000000000000, 0x4000000000000000]),
        Fp::from_montgomery_limbs([0x8398bdd8b6db6db7, 0xbbc0f148939d4828, 0xdb6db6db6db6db6d, 0x2db6db6db6db6db6]),
        Fp::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x2000000000000000]),
    ],
    [
        Fp::from_montgomery_limbs([0x8398bdd8b6db6db7, 0xbbc0f148939d4828, 0xdb6db6db6db6db6d, 0x2db6db6db6db6db6]),
        Fp::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x2000000000000000]),
        Fp::from_montgomery_limbs([0xc6e037a01c71c71d, 0x130ac6c4e8b8fc2b, 0x0000000000000000, 0x4000000000000000]),
    ],
    [
        Fp::from_montgomery_limbs([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x2000000000000000]),
        Fp::from_montgomery_limbs([0xc6e037a01c71c71d, 0x130ac6c4e8b8fc2b, 0x0000000000000000, 0x4000000000000000]),
        Fp::from_montgomery_limbs([0x51d5d695cccccccd, 0x6d4151cc01dc31d2, 0x6666666666666666, 0x2666666666666666]),
    ],
];
