use super::Cong;

/// A Cong used to generate seeds for other generators.
pub type Seeder = Cong;

/// Returns the seed value at position i, or 0 if the slice is too short.
/// Generators sanitize 0 into a valid state where needed.
#[inline]
pub fn seed_at(seeds: &[u32], i: usize) -> u32 {
    seeds.get(i).copied().unwrap_or(0)
}

/// Returns the values that do not fit into the leading `num_seeds` state words.
#[inline]
pub fn extra_seeds(seeds: &[u32], num_seeds: usize) -> &[u32] {
    seeds.get(num_seeds ..).unwrap_or(&[])
}

/// Decodes little-endian 32-bit words from seed bytes.
pub fn words_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u32; N] {
    core::array::from_fn(|i| {
        let mut word = [0u8; 4];
        if let Some(chunk) = bytes.get(i * 4 .. i * 4 + 4) {
            word.copy_from_slice(chunk);
        }
        u32::from_le_bytes(word)
    })
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        let seeds = [7, 8, 9];
        assert_eq!(7, seed_at(&seeds, 0));
        assert_eq!(9, seed_at(&seeds, 2));
        assert_eq!(0, seed_at(&seeds, 3));
        assert_eq!(0, seed_at(&[], 0));

        assert_eq!(&[8, 9], extra_seeds(&seeds, 1));
        assert!(extra_seeds(&seeds, 3).is_empty());
        assert!(extra_seeds(&seeds, 4).is_empty());

        let bytes = [1, 0, 0, 0, 0x78, 0x56, 0x34, 0x12];
        assert_eq!([1, 0x12345678], words_from_le_bytes::<2>(&bytes));
        assert_eq!([1, 0x12345678, 0], words_from_le_bytes::<3>(&bytes));
    }
}
