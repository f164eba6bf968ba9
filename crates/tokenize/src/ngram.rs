//! Sliding-window n-grams over a token stream.

/// Join every window of `n` consecutive tokens into one composite token.
///
/// Produces `max(0, len - n + 1)` tokens, in order. `n == 0` yields nothing;
/// `n == 1` copies the input.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize, joiner: &str) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(tokens.len() - n + 1);
    for window in tokens.windows(n) {
        let width = window.iter().map(|t| t.as_ref().len()).sum::<usize>()
            + joiner.len() * (n - 1);
        let mut gram = String::with_capacity(width);
        for (idx, token) in window.iter().enumerate() {
            if idx > 0 {
                gram.push_str(joiner);
            }
            gram.push_str(token.as_ref());
        }
        out.push(gram);
    }
    out
}
