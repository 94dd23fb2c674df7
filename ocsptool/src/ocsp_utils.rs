//! Functions that assemble an OCSP request from the files named on the command line

use std::fs;
use std::path::Path;

use der::Decode;
use log::{debug, error, info, warn};
use rand_core::{OsRng, RngCore};
use x509_cert::Certificate;
use x509_ocsp::CertId;

use certcheck::*;

use crate::args::OcsptoolArgs;

/// Length of nonces generated when the settings require a nonce and none was provided.
pub const GENERATED_NONCE_LEN: usize = 32;

/// `get_file_as_byte_vec_pem` returns the contents of the named file, decoding it first if it is
/// PEM-encoded.
pub fn get_file_as_byte_vec_pem(filename: &Path) -> Result<Vec<u8>> {
    let b = fs::read(filename)?;
    if b.first() == Some(&0x2D) {
        return match pem_rfc7468::decode_vec(b.as_slice()) {
            Ok(b) => Ok(b.1),
            Err(e) => {
                error!("Failed to parse PEM from {:?}: {:?}", filename, e);
                Err(Error::Unrecognized)
            }
        };
    }
    Ok(b)
}

/// `read_certificate` reads and parses the certificate in the named file.
pub fn read_certificate(filename: &str) -> Result<Certificate> {
    let b = get_file_as_byte_vec_pem(Path::new(filename))?;
    match Certificate::from_der(&b) {
        Ok(cert) => Ok(cert),
        Err(e) => {
            error!("Failed to parse certificate from {}: {}", filename, e);
            Err(Error::Asn1Error(e))
        }
    }
}

/// `generate_nonce` returns [`GENERATED_NONCE_LEN`] bytes read from the operating system's random
/// number generator.
pub fn generate_nonce() -> Result<Vec<u8>> {
    let mut nonce = vec![0u8; GENERATED_NONCE_LEN];
    if let Err(e) = OsRng.try_fill_bytes(&mut nonce) {
        error!("Failed to generate nonce: {}", e);
        return Err(Error::Unrecognized);
    }
    Ok(nonce)
}

/// `nonce_for_request` returns the nonce to include in a request, if any. An explicitly provided
/// nonce takes precedence, otherwise a nonce is generated when `cps` requires one.
pub fn nonce_for_request(
    args: &OcsptoolArgs,
    cps: &CertificationPathSettings,
) -> Result<Option<Vec<u8>>> {
    if args.no_nonce {
        return Ok(None);
    }
    if let Some(nonce) = &args.nonce {
        let nonce = hex_to_buffer(nonce)?;
        if nonce.is_empty() {
            error!("Nonce provided via --nonce is empty");
            return Err(Error::LengthError);
        }
        return Ok(Some(nonce));
    }
    if cps.require_nonce {
        return Ok(Some(generate_nonce()?));
    }
    Ok(None)
}

fn warn_if_not_valid(cert: &Certificate, toi: &TimeOfInterest) {
    let validity = &cert.tbs_certificate.validity;
    if *toi < validity.not_before || *toi > validity.not_after {
        warn!(
            "Certificate issued to {} is not valid at {}",
            subject_to_string(cert),
            toi
        );
    }
}

/// `prepare_request` reads the certificates and settings named in `args` and returns the encoded
/// request along with the nonce it carries, if any.
pub fn prepare_request(args: &OcsptoolArgs) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    let cps = read_settings(args.settings.as_deref())?;
    let pe = PkiEnvironment::default();

    let issuer = read_certificate(&args.issuer)?;
    let toi = TimeOfInterest::from_setting(cps.time_of_interest)?;

    let mut cert_ids: Vec<CertId> = vec![];
    for filename in &args.target {
        let target = read_certificate(filename)?;
        if target.tbs_certificate.issuer != issuer.tbs_certificate.subject {
            warn!(
                "Issuer name in {} does not match subject name in {}",
                filename, args.issuer
            );
        }
        if let Some(toi) = &toi {
            warn_if_not_valid(&target, toi);
        }
        let cp = CertPathConstraintsParameters::from_settings(&pe, &cps, &target, None)?;
        debug!("Requesting status for {}", cp);
        cert_ids.push(cert_id_for(&target, &issuer)?);
    }

    let extensions = match nonce_for_request(args, &cps)? {
        Some(nonce) => vec![nonce_extension(&nonce)?],
        None => vec![],
    };

    let mut req = OcspRequest::new(&pe, cert_ids, extensions)?;
    let enc_req = req.encode()?;
    let nonce = req.nonce().map(|n| n.to_vec());
    if let Some(n) = &nonce {
        info!("Request nonce: {}", buffer_to_hex(n));
    }
    Ok((enc_req, nonce))
}

/// `write_request` saves `enc_req` to the file named by the output argument or, absent that,
/// prints it to stdout as ASCII hex.
pub fn write_request(args: &OcsptoolArgs, enc_req: &[u8]) -> Result<()> {
    match &args.output {
        Some(output) => {
            if let Err(e) = fs::write(output, enc_req) {
                error!("Failed to write request to {}: {}", output, e);
                return Err(Error::from(e));
            }
            info!("Wrote {} byte request to {}", enc_req.len(), output);
        }
        None => println!("{}", buffer_to_hex(enc_req)),
    }
    Ok(())
}

#[test]
fn nonce_selection() {
    let mut args = OcsptoolArgs::default();
    let mut cps = CertificationPathSettings::new();
    assert_eq!(None, nonce_for_request(&args, &cps).unwrap());

    cps.require_nonce = true;
    let generated = nonce_for_request(&args, &cps).unwrap().unwrap();
    assert_eq!(GENERATED_NONCE_LEN, generated.len());

    args.nonce = Some("0a0b0c".to_string());
    assert_eq!(
        Some(vec![0x0a, 0x0b, 0x0c]),
        nonce_for_request(&args, &cps).unwrap()
    );

    args.nonce = Some("0A0B0C".to_string());
    assert_eq!(
        Some(vec![0x0a, 0x0b, 0x0c]),
        nonce_for_request(&args, &cps).unwrap()
    );

    args.nonce = Some("xyz".to_string());
    assert!(nonce_for_request(&args, &cps).is_err());

    args.nonce = None;
    args.no_nonce = true;
    assert_eq!(None, nonce_for_request(&args, &cps).unwrap());
}

#[test]
fn read_der_and_pem() {
    let der = read_certificate("../certcheck/tests/examples/ServerCert.der").unwrap();
    let pem = read_certificate("../certcheck/tests/examples/ServerCert.pem").unwrap();
    assert_eq!(der, pem);
    assert!(read_certificate("../certcheck/tests/examples/settings.json").is_err());
    assert_eq!(
        Err(Error::StdIoError(std::io::ErrorKind::NotFound)),
        read_certificate("../certcheck/tests/examples/missing.der")
    );
}

#[test]
fn prepare_request_with_nonce() {
    let args = OcsptoolArgs {
        target: vec!["../certcheck/tests/examples/ServerCert.der".to_string()],
        issuer: "../certcheck/tests/examples/TestRoot.der".to_string(),
        nonce: Some("0102".to_string()),
        ..Default::default()
    };
    let (enc_req, nonce) = prepare_request(&args).unwrap();
    assert_eq!(Some(vec![0x04, 0x02, 0x01, 0x02]), nonce);
    assert!(enc_req.ends_with(&[0x04, 0x02, 0x01, 0x02]));
}
