/// Class applied to faded stop words; the stylesheet reduces their opacity.
const STOP_SPAN_OPEN: &str = "<span class=\"rr-stop\">";
const STOP_SPAN_CLOSE: &str = "</span>";

/// Recognized English stop words, sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

fn is_stop_word(word: &str) -> bool {
    let lowered = word.to_ascii_lowercase();
    STOP_WORDS.binary_search(&lowered.as_str()).is_ok()
}

/// Wraps whole-word stop words in the article markup with a fade span,
/// leaving tags and all other text untouched. Matching is case-insensitive
/// and only applies to text outside of tags, so the markup structure of the
/// extracted article is preserved.
pub fn fade_stop_words(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + markup.len() / 4);
    let mut word = String::new();
    let mut in_tag = false;

    let flush = |out: &mut String, word: &mut String| {
        if word.is_empty() {
            return;
        }
        if is_stop_word(word) {
            out.push_str(STOP_SPAN_OPEN);
            out.push_str(word);
            out.push_str(STOP_SPAN_CLOSE);
        } else {
            out.push_str(word);
        }
        word.clear();
    };

    for ch in markup.chars() {
        if in_tag {
            out.push(ch);
            if ch == '>' {
                in_tag = false;
            }
        } else if ch == '<' {
            flush(&mut out, &mut word);
            in_tag = true;
            out.push(ch);
        } else if ch.is_alphabetic() || ch == '\'' {
            word.push(ch);
        } else {
            flush(&mut out, &mut word);
            out.push(ch);
        }
    }
    flush(&mut out, &mut word);

    out
}
