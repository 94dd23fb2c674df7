//! Provides definitions of the algorithm and extension OIDs used when preparing OCSP requests

use der::asn1::ObjectIdentifier;

/// id-sha1 OBJECT IDENTIFIER ::= {
///     iso(1) identified-organization(3) oiw(14) secsig(3)
///     algorithms(2) 26 }
pub const PKIXALG_SHA1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.14.3.2.26");

/// id-pkix-ocsp-nonce OBJECT IDENTIFIER ::= { id-pkix-ocsp 2 }
pub const PKIX_OCSP_NONCE: ObjectIdentifier = const_oid::db::rfc6960::ID_PKIX_OCSP_NONCE;

#[test]
fn alg_oids_test() {
    use alloc::string::ToString;
    assert_eq!("1.3.14.3.2.26", PKIXALG_SHA1.to_string());
    assert_eq!("1.3.6.1.5.5.7.48.1.2", PKIX_OCSP_NONCE.to_string());
}
