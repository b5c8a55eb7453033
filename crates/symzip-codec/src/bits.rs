//! Bit packing for Huffman code streams
//!
//! Bits are written MSB-first: the first code bit lands in bit 7 of byte 0.

use crate::code_table::Code;

/// Accumulates code bits into bytes
#[derive(Default, Debug)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_count: usize,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer sized for roughly `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_count: 0,
        }
    }

    /// Append one bit
    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }

        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Append every bit of a code, first bit first
    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
    }

    /// Number of bits written so far
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Finish writing, returning the packed bytes and the number of zero padding bits
    pub fn finish(self) -> (Vec<u8>, u8) {
        let padding = (8 - self.bit_count % 8) % 8;
        (self.bytes, padding as u8)
    }
}

/// Iterates the first `bit_count` bits of a packed byte slice
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_count: usize,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Read `bit_count` bits; trailing padding beyond it is never yielded
    pub fn new(bytes: &'a [u8], bit_count: usize) -> Self {
        Self {
            bytes,
            bit_count: bit_count.min(bytes.len() * 8),
            position: 0,
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position >= self.bit_count {
            return None;
        }
        let byte = self.bytes[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bit_count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
