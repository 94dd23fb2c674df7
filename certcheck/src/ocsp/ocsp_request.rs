//! Structures and functions to prepare DER-encoded OCSP requests

use alloc::format;
use alloc::vec::Vec;

use der::asn1::OctetString;
use der::Encode;
use x509_cert::ext::{Extension, Extensions};
use x509_ocsp::{CertId, Request, TbsRequest, Version};

use crate::environment::pki_environment::PkiEnvironment;
use crate::util::error::*;
use crate::util::logging::*;
use crate::util::pdv_alg_oids::PKIX_OCSP_NONCE;
use crate::util::pdv_utilities::hex_dump;

/// [`OcspRequest`] aggregates the CertIDs and request extensions for a single OCSP request and
/// prepares the DER encoding of:
///
/// ```text
/// OCSPRequest ::= SEQUENCE {
///     tbsRequest              TBSRequest }
///
/// TBSRequest ::= SEQUENCE {
///     requestList             SEQUENCE OF Request,
///     requestExtensions   [2] EXPLICIT Extensions OPTIONAL }
///
/// Request ::= SEQUENCE {
///     reqCert                 CertID }
/// ```
///
/// The version field is always the DEFAULT v1 value and so is never emitted. Neither a
/// requestorName nor an optionalSignature is ever included.
///
/// The nonce is captured as a side effect of [`encode`](OcspRequest::encode). It is absent until
/// `encode` succeeds at least once.
pub struct OcspRequest<'a> {
    pe: &'a PkiEnvironment,
    cert_ids: Vec<CertId>,
    extensions: Extensions,
    nonce: Option<Vec<u8>>,
}

impl<'a> OcspRequest<'a> {
    /// Creates a new [`OcspRequest`]. The `pe` parameter is consulted to recognize nonce extensions.
    ///
    /// At least one CertID must be provided. An empty `cert_ids` vector yields [`Error::LengthError`].
    /// CertID order is retained in the encoded request and is significant when matching responses
    /// to requests.
    pub fn new(
        pe: &'a PkiEnvironment,
        cert_ids: Vec<CertId>,
        extensions: Vec<Extension>,
    ) -> Result<Self> {
        if cert_ids.is_empty() {
            log_message(
                &PeLogLevels::PeError,
                "An OCSP request must identify at least one certificate",
            );
            return Err(Error::LengthError);
        }
        Ok(OcspRequest {
            pe,
            cert_ids,
            extensions,
            nonce: None,
        })
    }

    /// Returns the CertIDs in the order in which they appear in the request
    pub fn cert_ids(&self) -> &[CertId] {
        &self.cert_ids
    }

    /// Returns the request extensions in the order in which they appear in the request
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Returns the raw value of the nonce extension captured by the most recent successful
    /// [`encode`](OcspRequest::encode) call, if any.
    pub fn nonce(&self) -> Option<&[u8]> {
        self.nonce.as_deref()
    }

    /// `encode` returns the DER encoding of the request.
    ///
    /// Each extension identifier is checked against the nonce matchers of the [`PkiEnvironment`].
    /// Every match overwrites the previously captured value, so when more than one nonce extension
    /// is present the value of the last one is retained. The captured value is the content of the
    /// extnValue OCTET STRING, copied verbatim.
    ///
    /// Encoding failures, e.g., an extension whose encoded length exceeds what DER can express, are
    /// returned as [`Error::Asn1Error`] and leave the previously captured nonce unchanged. The
    /// request's extensions are unaffected either way.
    pub fn encode(&mut self) -> Result<Vec<u8>> {
        let request_list: Vec<Request> = self
            .cert_ids
            .iter()
            .map(|cert_id| Request {
                req_cert: cert_id.clone(),
                single_request_extensions: None,
            })
            .collect();

        let mut nonce = None;
        for ext in &self.extensions {
            if self.pe.is_nonce_extension(&ext.extn_id) {
                nonce = Some(ext.extn_value.as_bytes().to_vec());
            }
        }

        // extensions are moved into the request for encoding and restored afterwards
        let request_extensions = if self.extensions.is_empty() {
            None
        } else {
            Some(core::mem::take(&mut self.extensions))
        };

        let tbs_request = TbsRequest {
            version: Version::V1,
            requestor_name: None,
            request_list,
            request_extensions,
        };
        let ocsp_req = x509_ocsp::OcspRequest {
            tbs_request,
            optional_signature: None,
        };

        let r = ocsp_req.to_der();
        if let Some(extensions) = ocsp_req.tbs_request.request_extensions {
            self.extensions = extensions;
        }
        let enc_ocsp_req = match r {
            Ok(eor) => eor,
            Err(e) => {
                log_message(
                    &PeLogLevels::PeError,
                    format!("Failed to encode OCSP request with {}", e).as_str(),
                );
                return Err(Error::Asn1Error(e));
            }
        };

        if debug_enabled() {
            log_message(
                &PeLogLevels::PeDebug,
                format!(
                    "OCSP request for {} certificate(s):\n{}",
                    self.cert_ids.len(),
                    hex_dump(&enc_ocsp_req)
                )
                .as_str(),
            );
        }

        self.nonce = nonce;
        Ok(enc_ocsp_req)
    }
}

/// `nonce_extension` prepares a non-critical id-pkix-ocsp-nonce extension carrying `nonce`. The
/// extnValue contains the DER encoding of an OCTET STRING wrapping the nonce, per
/// [RFC 8954](https://datatracker.ietf.org/doc/html/rfc8954).
pub fn nonce_extension(nonce: &[u8]) -> Result<Extension> {
    let enc_nonce = OctetString::new(nonce)?.to_der()?;
    Ok(Extension {
        extn_id: PKIX_OCSP_NONCE,
        critical: false,
        extn_value: OctetString::new(enc_nonce)?,
    })
}

#[test]
fn nonce_extension_test() {
    use hex_literal::hex;

    let ext = nonce_extension(&hex!("0102030405060708")).unwrap();
    assert_eq!(PKIX_OCSP_NONCE, ext.extn_id);
    assert!(!ext.critical);
    assert_eq!(
        &hex!("04080102030405060708"),
        ext.extn_value.as_bytes()
    );
}
