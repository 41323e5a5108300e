//! Statistics module
//!
//! Optional benchmarking/cryptanalysis harness: entropy, a chi-square
//! uniformity statistic, UACI, NPCR, and Pearson correlation between a
//! plaintext and ciphertext byte stream. These are properties of the
//! *output distribution*, not invariants of the core, and consume the
//! public [`crate::session::Session`] API only — they never reach into
//! duplex internals. Grounded in the original reference implementation's
//! `calculateEntropy`/`histogramUniformity`/`uaci`/`npcr`/`correlationCoefficient`.

/// Shannon entropy of a byte stream, in bits per byte.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut frequency = [0u64; 256];
    for &b in data {
        frequency[b as usize] += 1;
    }

    let len = data.len() as f64;
    -frequency
        .iter()
        .filter(|&&f| f != 0)
        .map(|&f| {
            let p = f as f64 / len;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Chi-square statistic against a uniform byte distribution; lower is more uniform.
pub fn histogram_uniformity(data: &[u8]) -> f64 {
    let mut frequency = [0u64; 256];
    for &b in data {
        frequency[b as usize] += 1;
    }

    let expected = data.len() as f64 / 256.0;
    frequency
        .iter()
        .map(|&f| {
            let diff = f as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Unified Average Changing Intensity between a plaintext and equal-length ciphertext, as a percentage.
pub fn uaci(plaintext: &[u8], ciphertext: &[u8]) -> f64 {
    debug_assert_eq!(plaintext.len(), ciphertext.len());
    let sum: f64 = plaintext
        .iter()
        .zip(ciphertext)
        .map(|(&p, &c)| (p as f64 - c as f64).abs())
        .sum();
    (sum / (plaintext.len() as f64 * 255.0)) * 100.0
}

/// Number of Pixels Change Rate (here: byte change rate) between a
/// plaintext and equal-length ciphertext, as a percentage.
pub fn npcr(plaintext: &[u8], ciphertext: &[u8]) -> f64 {
    debug_assert_eq!(plaintext.len(), ciphertext.len());
    let changed = plaintext
        .iter()
        .zip(ciphertext)
        .filter(|(p, c)| p != c)
        .count();
    (changed as f64 / plaintext.len() as f64) * 100.0
}

/// Pearson correlation coefficient between a plaintext and equal-length ciphertext byte stream.
pub fn correlation(plaintext: &[u8], ciphertext: &[u8]) -> f64 {
    debug_assert_eq!(plaintext.len(), ciphertext.len());
    let n = plaintext.len() as f64;

    let mean_in: f64 = plaintext.iter().map(|&b| b as f64).sum::<f64>() / n;
    let mean_out: f64 = ciphertext.iter().map(|&b| b as f64).sum::<f64>() / n;

    let mut var_in = 0.0;
    let mut var_out = 0.0;
    let mut cov = 0.0;
    for (&p, &c) in plaintext.iter().zip(ciphertext) {
        let dp = p as f64 - mean_in;
        let dc = c as f64 - mean_out;
        var_in += dp * dp;
        var_out += dc * dc;
        cov += dp * dc;
    }
    var_in /= n;
    var_out /= n;
    cov /= n;

    cov / (var_in * var_out).sqrt()
}
