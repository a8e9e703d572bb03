//! Small integer and string helpers.

/// Multiplicative string hash (`h = h * 33 + c`) reduced to 31 bits.
///
/// Characters contribute their Unicode scalar value. Only the low 31 bits
/// are kept, so wrapping in the intermediate steps does not change the
/// result.
pub fn string_hash(s: &str) -> u32 {
    let hash = s.chars().fold(0u64, |hash, c| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(c))
    });
    (hash & 0x7FFF_FFFF) as u32
}

/// Trial-division primality test over the 6k ± 1 candidates.
///
/// Values below 2 follow a fixed convention: 1 is not prime, while 0 and
/// every negative number report `true`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return n <= 0;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    while i.checked_mul(i).is_some_and(|square| square <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Case-insensitive Levenshtein distance, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    // Single rolling row: `row[j]` is the distance between the current
    // prefix of `a` and `b[..j]`.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + above.min(row[j]).min(diagonal)
            };
            diagonal = above;
        }
    }
    row[b.len()]
}
