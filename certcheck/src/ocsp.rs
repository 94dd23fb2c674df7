//! OCSP request preparation
//!
//! The ocsp module prepares unsigned, default-version OCSP requests per
//! [RFC 6960 Section 4.1](https://datatracker.ietf.org/doc/html/rfc6960#section-4.1). Requests
//! carry one or more CertIDs and, optionally, request extensions. When a nonce extension is
//! included, its value is captured while encoding and is available afterwards so a response can
//! be matched to the request.
//!
//! ```
//! use certcheck::*;
//! use der::asn1::OctetString;
//! use spki::AlgorithmIdentifierOwned;
//! use x509_cert::serial_number::SerialNumber;
//! use x509_ocsp::CertId;
//!
//! let cert_id = CertId {
//!     hash_algorithm: AlgorithmIdentifierOwned { oid: PKIXALG_SHA1, parameters: None },
//!     issuer_name_hash: OctetString::new([0x11; 20].as_slice()).unwrap(),
//!     issuer_key_hash: OctetString::new([0x22; 20].as_slice()).unwrap(),
//!     serial_number: SerialNumber::new(&[42]).unwrap(),
//! };
//!
//! let pe = PkiEnvironment::default();
//! let nonce = nonce_extension(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
//!
//! let mut req = OcspRequest::new(&pe, vec![cert_id], vec![nonce]).unwrap();
//! assert!(req.nonce().is_none());
//! let enc_req = req.encode().unwrap();
//! assert_eq!(0x30, enc_req[0]);
//! assert_eq!(Some([0x04, 0x08, 1, 2, 3, 4, 5, 6, 7, 8].as_slice()), req.nonce());
//! ```

pub mod cert_id;
pub mod ocsp_request;

pub use crate::{ocsp::cert_id::*, ocsp::ocsp_request::*};
