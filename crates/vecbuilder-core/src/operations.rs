/// Complement a single DNA base. Anything that is not A, C, G or T
/// (including N) passes through unchanged.
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// The opposite strand, read 5' to 3'.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}
