use certcheck::*;
use der::Decode;
use std::sync::{Arc, Mutex};
use x509_cert::Certificate;

struct SerialBlocklist {
    serials: Vec<Vec<u8>>,
    consulted: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl DistrustSource for SerialBlocklist {
    fn is_distrusted(&self, cert: &Certificate) -> bool {
        let serial = cert.tbs_certificate.serial_number.as_bytes().to_vec();
        self.consulted.lock().unwrap().push(serial.clone());
        self.serials.contains(&serial)
    }
}

fn test_root() -> Certificate {
    Certificate::from_der(include_bytes!("examples/TestRoot.der")).unwrap()
}

fn server_cert() -> Certificate {
    Certificate::from_der(include_bytes!("examples/ServerCert.der")).unwrap()
}

fn revoked_cert() -> Certificate {
    Certificate::from_der(include_bytes!("examples/SecondServerCert.der")).unwrap()
}

fn environment_blocking(serials: Vec<Vec<u8>>) -> (PkiEnvironment, Arc<Mutex<Vec<Vec<u8>>>>) {
    let consulted = Arc::new(Mutex::new(vec![]));
    let mut pe = PkiEnvironment::default();
    pe.add_distrust_source(Box::new(SerialBlocklist {
        serials,
        consulted: consulted.clone(),
    }));
    (pe, consulted)
}

#[test]
fn check_before_init_fails() {
    let pe = PkiEnvironment::default();
    let mut checker = UntrustedChecker::new(&pe);
    assert!(checker.direction().is_none());
    let mut unresolved = ObjectIdentifierSet::new();
    assert_eq!(
        Err(Error::NotInitialized),
        checker.check(&server_cert(), &mut unresolved)
    );
}

#[test]
fn checker_properties() {
    let pe = PkiEnvironment::default();
    let mut checker = UntrustedChecker::new(&pe);
    assert!(checker.is_forward_checking_supported());
    assert!(checker.supported_extensions().is_none());

    checker.init(TraversalDirection::Reverse).unwrap();
    assert_eq!(Some(TraversalDirection::Reverse), checker.direction());
    checker.init(TraversalDirection::Forward).unwrap();
    assert_eq!(Some(TraversalDirection::Forward), checker.direction());
}

#[test]
fn distrusted_certificate_is_rejected() {
    let (pe, consulted) = environment_blocking(vec![vec![0x2b]]);
    let mut checker = UntrustedChecker::new(&pe);
    checker.init(TraversalDirection::Forward).unwrap();

    let mut unresolved = ObjectIdentifierSet::new();
    unresolved.insert(PKIX_OCSP_NONCE);
    let before = unresolved.clone();

    // outcomes are independent of prior calls
    assert_eq!(Ok(()), checker.check(&server_cert(), &mut unresolved));
    let err = checker.check(&revoked_cert(), &mut unresolved).unwrap_err();
    match &err {
        Error::UntrustedCertificate(subject) => assert!(subject.contains("CN=revoked.example.test")),
        _ => panic!("unexpected error: {:?}", err),
    }
    assert!(err.to_string().starts_with("Untrusted certificate: "));
    assert_eq!(Ok(()), checker.check(&server_cert(), &mut unresolved));
    assert_eq!(Ok(()), checker.check(&test_root(), &mut unresolved));

    assert_eq!(before, unresolved);
    assert_eq!(4, consulted.lock().unwrap().len());
}

#[test]
fn no_sources_means_nothing_is_distrusted() {
    let pe = PkiEnvironment::default();
    let mut checker = UntrustedChecker::new(&pe);
    checker.init(TraversalDirection::Reverse).unwrap();
    let mut unresolved = ObjectIdentifierSet::new();
    for cert in [test_root(), server_cert(), revoked_cert()] {
        assert_eq!(Ok(()), checker.check(&cert, &mut unresolved));
    }
}

#[test]
fn check_chain_forward_stops_at_first_failure() {
    let (pe, consulted) = environment_blocking(vec![vec![0x2a]]);
    let mut checker = UntrustedChecker::new(&pe);

    // target first, certificate issued by the anchor last
    let chain = vec![server_cert(), revoked_cert(), test_root()];
    let r = check_chain(&mut checker, &chain, TraversalDirection::Forward);
    assert!(matches!(r, Err(Error::UntrustedCertificate(_))));
    assert_eq!(vec![vec![0x2a]], *consulted.lock().unwrap());
    assert_eq!(Some(TraversalDirection::Forward), checker.direction());
}

#[test]
fn check_chain_reverse_order() {
    let (pe, consulted) = environment_blocking(vec![vec![0x2b]]);
    let mut checker = UntrustedChecker::new(&pe);

    let chain = vec![server_cert(), revoked_cert(), test_root()];
    let r = check_chain(&mut checker, &chain, TraversalDirection::Reverse);
    assert!(matches!(r, Err(Error::UntrustedCertificate(_))));
    assert_eq!(vec![vec![0x01], vec![0x2b]], *consulted.lock().unwrap());

    let good_chain = vec![server_cert(), test_root()];
    assert_eq!(
        Ok(()),
        check_chain(&mut checker, &good_chain, TraversalDirection::Reverse)
    );
    assert_eq!(4, consulted.lock().unwrap().len());
}

struct ReverseOnly;
impl CertPathChecker for ReverseOnly {
    fn init(&mut self, _direction: TraversalDirection) -> Result<()> {
        Ok(())
    }
    fn is_forward_checking_supported(&self) -> bool {
        false
    }
    fn supported_extensions(&self) -> Option<&ObjectIdentifierSet> {
        None
    }
    fn check(&mut self, _cert: &Certificate, _unresolved: &mut ObjectIdentifierSet) -> Result<()> {
        Ok(())
    }
}

#[test]
fn forward_traversal_requires_support() {
    let chain = vec![server_cert()];
    assert_eq!(
        Err(Error::PathValidation(PathValidationStatus::Misconfiguration)),
        check_chain(&mut ReverseOnly, &chain, TraversalDirection::Forward)
    );
    assert_eq!(
        Ok(()),
        check_chain(&mut ReverseOnly, &chain, TraversalDirection::Reverse)
    );
}
