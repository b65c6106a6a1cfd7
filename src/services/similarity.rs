//! 文本相似度计算
//!
//! 基于最长匹配块的序列比对：反复取两段文本的最长公共连续块，再对块左右两侧
//! 递归匹配，相似度 = 2 × 匹配字符数 / 两段文本总字符数。

use std::collections::HashMap;

/// 去除首尾空白，并将连续空白（含换行）压缩为单个空格
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 计算两段文本的相似度，取值范围 [0.0, 1.0]
pub fn score(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    // 固定比较方向，保证 score(a, b) == score(b, a)
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    SequenceMatcher::new(&first, &second).ratio()
}

/// 字符级最长匹配块比对
struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// b 中每个字符出现的位置（升序）
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / total as f64
    }

    /// 所有匹配块的字符数之和
    fn matched_chars(&self) -> usize {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut matched = 0;

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// 在 a[alo..ahi] 与 b[blo..bhi] 中寻找最长公共连续块
    ///
    /// 长度相同时取 a 中最靠前的块，其次取 b 中最靠前的块。
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // j2len[j] = 以 a[i-1]、b[j] 结尾的公共块长度
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        (best_i, best_j, best_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 8] = [
        "",
        "Define gravity.",
        "Define  gravity.\n",
        "1. 下列关于光合作用的说法正确的是",
        "1. 下列关于呼吸作用的说法正确的是",
        "abcd",
        "xyz",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
    ];

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a \n\t b  c\n"), "a b c");
        assert_eq!(normalize("\n \n"), "");
    }

    #[test]
    fn test_identical_is_one() {
        for s in SAMPLES {
            assert_eq!(score(s, s), 1.0, "sample: {:?}", s);
        }
    }

    #[test]
    fn test_whitespace_insensitive() {
        assert_eq!(score("Define gravity.", "  Define\n gravity. "), 1.0);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        for a in SAMPLES {
            for b in SAMPLES {
                let ab = score(a, b);
                assert_eq!(ab, score(b, a), "{:?} vs {:?}", a, b);
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }

    #[test]
    fn test_disjoint_is_zero() {
        assert_eq!(score("abcd", "xyz"), 0.0);
        assert_eq!(score("", "abc"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        // 匹配块 "ab" + "d"：2 * 3 / 8
        assert_eq!(score("abcd", "abxd"), 0.75);
        // 最长块 "bcd"：2 * 3 / 8
        assert_eq!(score("abcd", "bcde"), 0.75);
        // 一字之差的长题干属于高度相似
        let s = score(
            "1. 下列关于光合作用的说法正确的是",
            "1. 下列关于呼吸作用的说法正确的是",
        );
        assert!(s > 0.85 && s < 1.0, "score: {}", s);
    }
}
