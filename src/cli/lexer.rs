/// One `-flag parameter` pair as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFlag {
    /// The flag token as written, dashes included (e.g. `-v`).
    pub name: String,
    /// Everything up to the next flag token, trimmed. Quotes are kept.
    pub param: String,
}

/// Split a command line into its `(flag, parameter)` pairs.
///
/// A token beginning with one or two dashes opens a flag. Its parameter is
/// everything that follows, up to the next flag token or the end of the
/// line, with surrounding whitespace trimmed. A parameter that opens with a
/// single quote runs to the closing quote instead, so dash tokens inside
/// quotes never terminate it; the quotes are passed through for the caller
/// to strip. Output order equals source order.
pub fn lex(input: &str) -> Vec<RawFlag> {
    let spans = token_spans(input);
    let mut flags = Vec::new();

    let mut i = 0;
    while i < spans.len() {
        let (start, tok) = spans[i];
        if !is_flag_token(tok) {
            i += 1;
            continue;
        }

        let after = start + tok.len();
        let leading_ws = input[after..].len() - input[after..].trim_start().len();
        let param_begin = after + leading_ws;

        let mut next = i + 1;
        let param_end = if input[param_begin..].starts_with('\'') {
            // Quoted parameter: runs to the closing quote, quotes kept.
            let end = match input[param_begin + 1..].find('\'') {
                Some(close) => param_begin + 1 + close + 1,
                None => input.len(),
            };
            while next < spans.len() && spans[next].0 < end {
                next += 1;
            }
            end
        } else {
            let mut end = input.len();
            while next < spans.len() {
                let (s, t) = spans[next];
                if is_flag_token(t) {
                    end = s;
                    break;
                }
                next += 1;
            }
            end
        };

        flags.push(RawFlag {
            name: tok.to_string(),
            param: input[param_begin..param_end].trim().to_string(),
        });
        i = next;
    }

    flags
}

/// Strip one pair of surrounding single quotes, if present.
pub fn strip_quotes(param: &str) -> &str {
    param
        .strip_prefix('\'')
        .and_then(|p| p.strip_suffix('\''))
        .unwrap_or(param)
}

fn is_flag_token(token: &str) -> bool {
    token.starts_with('-')
}

/// Whitespace-separated tokens of `line`, with their byte offsets.
pub(crate) fn token_spans(line: &str) -> Vec<(usize, &str)> {
    line.split_whitespace()
        .map(|tok| (tok.as_ptr() as usize - line.as_ptr() as usize, tok))
        .collect()
}
