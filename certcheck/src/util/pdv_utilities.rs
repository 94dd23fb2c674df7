//! Utility functions shared by the OCSP and certificate checking modules

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str;

use subtle_encoding::hex;
use x509_cert::name::Name;
use x509_cert::Certificate;

/// `name_to_string` returns a string representation of given Name value.
pub fn name_to_string(name: &Name) -> String {
    name.to_string()
}

/// `subject_to_string` returns a string representation of the subject name of the given certificate.
pub fn subject_to_string(cert: &Certificate) -> String {
    name_to_string(&cert.tbs_certificate.subject)
}

/// `buffer_to_hex` takes a byte array and returns a string featuring upper case ASCII hex characters (without
/// commas, spaces, or brackets).
pub fn buffer_to_hex(buffer: &[u8]) -> String {
    let hex = hex::encode_upper(buffer);
    let r = str::from_utf8(hex.as_slice());
    if let Ok(s) = r {
        s.to_string()
    } else {
        "".to_string()
    }
}

/// `hex_to_buffer` takes a string of ASCII hex characters, either all lower case or all upper
/// case, and returns the bytes it represents.
pub fn hex_to_buffer(s: &str) -> crate::Result<Vec<u8>> {
    let s = s.trim().as_bytes();
    match hex::decode(s) {
        Ok(b) => Ok(b),
        Err(_) => hex::decode_upper(s).map_err(|_| crate::Error::ParseError),
    }
}

/// `hex_dump` renders a buffer as lines of sixteen space-separated hex octets, prefixed by the
/// offset of the first octet on each line.
pub fn hex_dump(buffer: &[u8]) -> String {
    let mut dump = String::new();
    for (i, chunk) in buffer.chunks(16).enumerate() {
        if i > 0 {
            dump.push('\n');
        }
        dump.push_str(&alloc::format!("{:04X}:", i * 16));
        for b in chunk {
            dump.push(' ');
            dump.push_str(&buffer_to_hex(&[*b]));
        }
    }
    dump
}

#[test]
fn hex_utilities_test() {
    assert_eq!("00A1FF", buffer_to_hex(&[0x00, 0xa1, 0xff]));
    assert_eq!(alloc::vec![0x00, 0xa1, 0xff], hex_to_buffer("00a1ff").unwrap());
    assert_eq!(alloc::vec![0x00, 0xa1, 0xff], hex_to_buffer(" 00A1FF\n").unwrap());
    assert!(hex_to_buffer("0g").is_err());
    assert_eq!(
        alloc::vec![0xab, 0xcd],
        hex_to_buffer(&buffer_to_hex(&[0xab, 0xcd])).unwrap()
    );

    let buf: Vec<u8> = (0u8..18).collect();
    let dump = hex_dump(&buf);
    assert_eq!(
        "0000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n0010: 10 11",
        dump
    );
    assert_eq!("", hex_dump(&[]));
}
