//! Published conformance vectors.
#![allow(dead_code)]

/// A single-signer verify vector (bip-schnorr, square-y nonce variant).
///
/// Rows with a secret key also reproduce under `sign`.
pub struct SchnorrVector {
    pub secret_key: Option<&'static str>,
    pub public_key: &'static str,
    pub message: &'static str,
    pub signature: &'static str,
    pub valid: bool,
    pub comment: &'static str,
}

pub const SCHNORR_VECTORS: &[SchnorrVector] = &[
    SchnorrVector {
        secret_key: Some("0000000000000000000000000000000000000000000000000000000000000001"),
        public_key: "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "787A848E71043D280C50470E8E1532B2DD5D20EE912A45DBDD2BD1DFBF187EF67031A98831859DC34DFFEEDDA86831842CCD0079E1F92AF177F7F22CC1DCED05",
        valid: true,
        comment: "",
    },
    SchnorrVector {
        secret_key: Some("B7E151628AED2A6ABF7158809CF4F3C762E7160F38B4DA56A784D9045190CFEF"),
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "2A298DACAE57395A15D0795DDBFD1DCB564DA82B0F269BC70A74F8220429BA1D1E51A22CCEC35599B8F266912281F8365FFC2D035A230434A1A64DC59F7013FD",
        valid: true,
        comment: "",
    },
    SchnorrVector {
        secret_key: Some("C90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B14E5C7"),
        public_key: "03FAC2114C2FBB091527EB7C64ECB11F8021CB45E8E7809D3C0938E4B8C0E5F84B",
        message: "5E2D58D8B3BCDF1ABADEC7829054F90DDA9805AAB56C77333024B9D0A508B75C",
        signature: "00DA9B08172A9B6F0466A2DEFD817F2D7AB437E0D253CB5395A963866B3574BE00880371D01766935B92D2AB4CD5C8A2A5837EC57FED7660773A05F0DE142380",
        valid: true,
        comment: "",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "03DEFDEA4CDB677750A420FEE807EACF21EB9898AE79B9768766E4FAA04A2D4A34",
        message: "4DF3C3F68FCC83B27E9D42C90431A72499F17875C81A599B566C9889B9696703",
        signature: "00000000000000000000003B78CE563F89A0ED9414F5AA28AD0D96D6795F9C6302A8DC32E64E86A333F20EF56EAC9BA30B7246D6D25E22ADB8C6BE1AEB08D49D",
        valid: true,
        comment: "",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "031B84C5567B126440995D3ED5AABA0565D71E1834604819FF9C17F5E9D5DD078F",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "52818579ACA59767E3291D91B76B637BEF062083284992F2D95F564CA6CB4E3530B1DA849C8E8304ADC0CFE870660334B3CFC18E825EF1DB34CFAE3DFC5D8187",
        valid: true,
        comment: "test fails if jacobi symbol of x(R) instead of y(R) is used",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "03EEFDEA4CDB677750A420FEE807EACF21EB9898AE79B9768766E4FAA04A2D4A34",
        message: "4DF3C3F68FCC83B27E9D42C90431A72499F17875C81A599B566C9889B9696703",
        signature: "00000000000000000000003B78CE563F89A0ED9414F5AA28AD0D96D6795F9C6302A8DC32E64E86A333F20EF56EAC9BA30B7246D6D25E22ADB8C6BE1AEB08D49D",
        valid: false,
        comment: "public key not on the curve",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "2A298DACAE57395A15D0795DDBFD1DCB564DA82B0F269BC70A74F8220429BA1DFA16AEE06609280A19B67A24E1977E4697712B5FD2943914ECD5F730901B4AB7",
        valid: false,
        comment: "incorrect R residuosity",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "03FAC2114C2FBB091527EB7C64ECB11F8021CB45E8E7809D3C0938E4B8C0E5F84B",
        message: "5E2D58D8B3BCDF1ABADEC7829054F90DDA9805AAB56C77333024B9D0A508B75C",
        signature: "00DA9B08172A9B6F0466A2DEFD817F2D7AB437E0D253CB5395A963866B3574BED092F9D860F1776A1F7412AD8A1EB50DACCC222BC8C0E26B2056DF2F273EFDEC",
        valid: false,
        comment: "negated message hash",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "787A848E71043D280C50470E8E1532B2DD5D20EE912A45DBDD2BD1DFBF187EF68FCE5677CE7A623CB20011225797CE7A8DE1DC6CCD4F754A47DA6C600E59543C",
        valid: false,
        comment: "negated s value",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "03DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "2A298DACAE57395A15D0795DDBFD1DCB564DA82B0F269BC70A74F8220429BA1D1E51A22CCEC35599B8F266912281F8365FFC2D035A230434A1A64DC59F7013FD",
        valid: false,
        comment: "negated public key",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "00000000000000000000000000000000000000000000000000000000000000009E9D01AF988B5CEDCE47221BFA9B222721F3FA408915444A4B489021DB55775F",
        valid: false,
        comment: "sG - eP is infinite, r = 0",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "0000000000000000000000000000000000000000000000000000000000000001D37DDF0254351836D84B1BD6A795FD5D523048F298C4214D187FE4892947F728",
        valid: false,
        comment: "sG - eP is infinite, r = 1",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "4A298DACAE57395A15D0795DDBFD1DCB564DA82B0F269BC70A74F8220429BA1D1E51A22CCEC35599B8F266912281F8365FFC2D035A230434A1A64DC59F7013FD",
        valid: false,
        comment: "sig[0:32] is not an X coordinate on the curve",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F1E51A22CCEC35599B8F266912281F8365FFC2D035A230434A1A64DC59F7013FD",
        valid: false,
        comment: "sig[0:32] is equal to field size",
    },
    SchnorrVector {
        secret_key: None,
        public_key: "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        message: "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        signature: "2A298DACAE57395A15D0795DDBFD1DCB564DA82B0F269BC70A74F8220429BA1DFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        valid: false,
        comment: "sig[32:64] is equal to curve order",
    },
];

/// Signer keys of the published three-party MuSig vector and their `ell`.
pub const MUSIG_PUBKEYS: [&str; 3] = [
    "021b34e02fbfab6153513c7578de070e1c9f2654b88109fb3906bb7f63dffd957d",
    "02bdaa2178ad0db31880dc326b1f8a6a383efd9a579962aac7008d8af738fa814d",
    "038810e83afc4412af9070102e22305c8ae85aad98aa84263db47149f1c9790500",
];

pub const MUSIG_ELL: &str = "1a5695438032bc21ffdade2dbabe5b30e5d49d202e15a2f3ee87c4a45b8b5805";

/// Known answers for `MUSIG_PUBKEYS` with the 4-byte little-endian index: the
/// coefficient of each key and the combined key. A big-endian index would give
/// `032801ab645dcc28cd82ac58f91d484d95fdf347161f27535215e9a4cfda2fc2da` instead.
pub const MUSIG_COEFFICIENTS: [&str; 3] = [
    "eab9efb1e33b2713303e4b99cf70e8400c64d8abb8b939b450b673a7d66ef283",
    "e1800d60c7b0ff26dae64557067dbf0f3773be27b156da417da959210d802d73",
    "90a7351c7e0f84fa989f5b359867269fa8d402ab94ebea502f3f28b3d1fc2d8a",
];

pub const MUSIG_COMBINED_PUBKEY: &str =
    "0226d77f91bcfe366a4f9390c38a7c03d025e541940a881cca98ac4237a0352537";

pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("vector hex")
}
