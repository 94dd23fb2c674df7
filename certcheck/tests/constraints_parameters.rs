use certcheck::*;
use der::Decode;
use x509_cert::anchor::TrustAnchorChoice;
use x509_cert::Certificate;

struct TestRootIsPlatformCa;
impl TrustAnchorClassifier for TestRootIsPlatformCa {
    fn is_recognized_root(&self, anchor: &TrustAnchorChoice) -> bool {
        match anchor {
            TrustAnchorChoice::Certificate(c) => {
                c.tbs_certificate.subject.to_string().contains("CN=Certcheck Test Root")
            }
            _ => false,
        }
    }
}

fn test_root() -> Certificate {
    Certificate::from_der(include_bytes!("examples/TestRoot.der")).unwrap()
}

fn server_cert() -> Certificate {
    Certificate::from_der(include_bytes!("examples/ServerCert.der")).unwrap()
}

#[test]
fn from_certificate_defaults_to_generic_variant() {
    let pe = PkiEnvironment::default();
    let cert = server_cert();
    let ta = TrustAnchorChoice::Certificate(test_root());
    let date = TimeOfInterest::from_unix_secs(1_767_225_600).unwrap();

    let cp = CertPathConstraintsParameters::from_certificate(&pe, &cert, None, Some(&ta), Some(date));
    assert_eq!(Variant::Generic, cp.variant());
    assert_eq!(Some(date), cp.date());

    let cp = CertPathConstraintsParameters::from_certificate(
        &pe,
        &cert,
        Some(Variant::TlsServer),
        Some(&ta),
        Some(date),
    );
    assert_eq!(Variant::TlsServer, cp.variant());
    assert_eq!("tls server", cp.variant().as_str());
}

#[test]
fn from_certificate_uses_certificate_key() {
    let pe = PkiEnvironment::default();
    let cert = server_cert();

    let cp = CertPathConstraintsParameters::from_certificate(&pe, &cert, None, None, None);
    let keys = cp.keys();
    assert_eq!(1, keys.len());
    assert_eq!(&cert.tbs_certificate.subject_public_key_info, keys[0]);
    assert_eq!(Some(&cert), cp.certificate());
    assert!(cp.date().is_none());
}

#[test]
fn from_key_key_set() {
    let pe = PkiEnvironment::default();
    let root = test_root();
    let key = &root.tbs_certificate.subject_public_key_info;

    let cp = CertPathConstraintsParameters::from_key(&pe, None, None, None);
    assert!(cp.keys().is_empty());
    assert_eq!(Variant::Generic, cp.variant());

    let cp = CertPathConstraintsParameters::from_key(&pe, Some(key), Some(Variant::CodeSigning), None);
    assert_eq!(vec![key], cp.keys());
    assert_eq!(Variant::CodeSigning, cp.variant());
    assert!(cp.certificate().is_none());
    assert!(cp.date().is_none());
}

#[test]
fn anchor_classification() {
    let mut pe = PkiEnvironment::default();
    pe.add_trust_anchor_classifier(Box::new(TestRootIsPlatformCa));

    let cert = server_cert();
    let ta = TrustAnchorChoice::Certificate(test_root());
    let other_ta = TrustAnchorChoice::Certificate(server_cert());
    let date = TimeOfInterest::from_unix_secs(1_767_225_600).unwrap();

    let cp = CertPathConstraintsParameters::from_certificate(&pe, &cert, None, Some(&ta), Some(date));
    assert!(cp.anchor_is_platform_ca());
    assert!(cp.trust_anchor().is_some());

    let cp = CertPathConstraintsParameters::from_certificate(
        &pe,
        &cert,
        None,
        Some(&other_ta),
        Some(date),
    );
    assert!(!cp.anchor_is_platform_ca());

    // no anchor means false regardless of other fields
    let cp = CertPathConstraintsParameters::from_certificate(
        &pe,
        &cert,
        Some(Variant::TlsServer),
        None,
        Some(date),
    );
    assert!(!cp.anchor_is_platform_ca());
    let key = &cert.tbs_certificate.subject_public_key_info;
    let cp = CertPathConstraintsParameters::from_key(&pe, Some(key), None, None);
    assert!(!cp.anchor_is_platform_ca());
    let cp = CertPathConstraintsParameters::from_key(&pe, Some(key), None, Some(&ta));
    assert!(cp.anchor_is_platform_ca());

    // without a classifier nothing is a platform root
    let pe = PkiEnvironment::default();
    let cp = CertPathConstraintsParameters::from_certificate(&pe, &cert, None, Some(&ta), None);
    assert!(!cp.anchor_is_platform_ca());
}

#[test]
fn extended_exception_msg() {
    let pe = PkiEnvironment::default();
    let cert = server_cert();

    let cp = CertPathConstraintsParameters::from_certificate(&pe, &cert, None, None, None);
    let msg = cp.extended_exception_msg();
    assert!(msg.starts_with(" used with certificate: "));
    assert!(msg.contains("CN=server.example.test"));

    let cp = CertPathConstraintsParameters::from_key(
        &pe,
        Some(&cert.tbs_certificate.subject_public_key_info),
        None,
        None,
    );
    assert_eq!(".", cp.extended_exception_msg());
}

#[test]
fn from_settings() {
    let pe = PkiEnvironment::default();
    let cert = server_cert();

    let mut cps = CertificationPathSettings::new();
    let cp = CertPathConstraintsParameters::from_settings(&pe, &cps, &cert, None).unwrap();
    assert_eq!(Variant::Generic, cp.variant());
    assert!(cp.date().is_none());

    cps.time_of_interest = 1_767_225_600;
    cps.variant = Variant::TlsClient;
    let cp = CertPathConstraintsParameters::from_settings(&pe, &cps, &cert, None).unwrap();
    assert_eq!(Variant::TlsClient, cp.variant());
    assert_eq!(Some(1_767_225_600), cp.date().map(|d| d.as_unix_secs()));
}

#[test]
fn evaluator_sees_trait_object() {
    fn describe(params: &dyn ConstraintsParameters) -> String {
        format!(
            "{} key(s), variant {}{}",
            params.keys().len(),
            params.variant(),
            params.extended_exception_msg()
        )
    }

    let pe = PkiEnvironment::default();
    let cp = CertPathConstraintsParameters::from_key(&pe, None, Some(Variant::TsaServer), None);
    assert_eq!("0 key(s), variant tsa server.", describe(&cp));
    assert!(cp.to_string().contains("tsa server"));
}
