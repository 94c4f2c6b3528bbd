use crate::inventory::domain::{ComponentHash, HashAlgorithm};
use sha2::{Digest, Sha256, Sha512};
use std::collections::BTreeSet;
use std::io::{self, Read};

/// Hex digests of one byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDigests {
    sha256: String,
    sha512: String,
}

impl ContentDigests {
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub fn sha512(&self) -> &str {
        &self.sha512
    }

    pub fn hashes(&self) -> BTreeSet<ComponentHash> {
        [
            ComponentHash::new(HashAlgorithm::Sha256, self.sha256.clone()),
            ComponentHash::new(HashAlgorithm::Sha512, self.sha512.clone()),
        ]
        .into_iter()
        .collect()
    }
}

/// Reader adapter that feeds every byte it yields into SHA-256 and SHA-512.
///
/// Lets a caller consume a stream once (copy it, parse it) while getting the
/// digests of exactly what was read.
pub struct DigestReader<R> {
    inner: R,
    sha256: Sha256,
    sha512: Sha512,
    bytes_read: u64,
}

impl<R: Read> DigestReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            sha256: Sha256::new(),
            sha512: Sha512::new(),
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn finish(self) -> ContentDigests {
        ContentDigests {
            sha256: hex::encode(self.sha256.finalize()),
            sha512: hex::encode(self.sha512.finalize()),
        }
    }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.sha256.update(&buf[..n]);
        self.sha512.update(&buf[..n]);
        self.bytes_read += n as u64;
        Ok(n)
    }
}

/// Streams `reader` to the end and returns its digests.
pub fn digest_stream<R: Read>(reader: R) -> io::Result<ContentDigests> {
    let mut digest = DigestReader::new(reader);
    io::copy(&mut digest, &mut io::sink())?;
    Ok(digest.finish())
}
