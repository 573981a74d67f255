//! Domain name value type.
//!
//! A [`Domain`] is the literal text of a name. It is never split, lowercased
//! or otherwise normalized; ordering and containment work directly on the
//! bytes, treating `.` as the label separator.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label separator.
pub const SEPARATOR: u8 = b'.';

/// An immutable domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: String,
}

impl Domain {
    /// Create a domain from its text. No validation is performed.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Length of the name in bytes.
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Labels from the most specific to the most general.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.name.split(SEPARATOR as char)
    }

    /// Compare two domains in reverse-label order.
    ///
    /// Names are walked backward from their last byte. At the first position
    /// where they differ, a separator is smaller than any other byte, and
    /// otherwise bytes compare as usual. If one name runs out first it is the
    /// smaller one. This keeps labels whole: `y.com` sorts before
    /// `sub.y.com`, which sorts before `x-y.com`, even though `-` is below
    /// `.` in ASCII. An ancestor always sorts before its subdomains.
    pub fn reverse_label_cmp(&self, other: &Domain) -> Ordering {
        let lhs = self.name.bytes().rev();
        let rhs = other.name.bytes().rev();

        for (l, r) in lhs.zip(rhs) {
            if l == r {
                continue;
            }
            return match (l, r) {
                (SEPARATOR, _) => Ordering::Less,
                (_, SEPARATOR) => Ordering::Greater,
                _ => l.cmp(&r),
            };
        }

        self.name.len().cmp(&other.name.len())
    }

    /// Whether `self` equals `other` or lies underneath it.
    ///
    /// Matches are only accepted on a label boundary, so `gooddomain.com` is
    /// not a subdomain of `domain.com`.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        let name = self.name.as_bytes();
        let parent = other.name.as_bytes();

        if name.len() < parent.len() || !name.ends_with(parent) {
            return false;
        }

        // Same as checking that ".name" ends with ".parent".
        name.len() == parent.len() || name[name.len() - parent.len() - 1] == SEPARATOR
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.reverse_label_cmp(other)
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(name: &str) -> Domain {
        Domain::new(name)
    }

    #[test]
    fn new_keeps_text_verbatim() {
        let domain = d("Alt.Duck.COM");

        assert_eq!(domain.as_str(), "Alt.Duck.COM");
        assert_eq!(domain.to_string(), "Alt.Duck.COM");
        assert_eq!(domain.len(), 12);
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(d("com"), d("com"));
        assert_ne!(d("com"), d("ru"));
        assert_ne!(d("com"), d("COM"));
        assert_ne!(d("com"), d("com."));
    }

    #[test]
    fn labels_most_specific_first() {
        let domain = d("alt.duck.com");

        assert_eq!(domain.labels().collect::<Vec<_>>(), ["alt", "duck", "com"]);
        assert_eq!(domain.labels().next_back(), Some("com"));
    }

    #[test]
    fn is_subdomain_of_direct_child() {
        assert!(d("duck.com").is_subdomain_of(&d("com")));
        assert!(!d("duck.ru").is_subdomain_of(&d("com")));
    }

    #[test]
    fn is_subdomain_of_deep_child() {
        assert!(d("alter.duck.com").is_subdomain_of(&d("com")));
        assert!(d("alter.duck.com").is_subdomain_of(&d("duck.com")));
    }

    #[test]
    fn is_subdomain_of_is_reflexive() {
        for name in ["com", "class.com", "a.b.c.d", "x-y.com", "."] {
            assert!(d(name).is_subdomain_of(&d(name)), "{name}");
        }
    }

    #[test]
    fn is_subdomain_of_respects_label_boundary() {
        assert!(!d("gooddomain.com").is_subdomain_of(&d("domain.com")));
        assert!(!d("xcom").is_subdomain_of(&d("com")));
        assert!(!d("x-y.com").is_subdomain_of(&d("y.com")));
    }

    #[test]
    fn is_subdomain_of_is_not_symmetric() {
        assert!(!d("com").is_subdomain_of(&d("duck.com")));
        assert!(!d("duck.com").is_subdomain_of(&d("alter.duck.com")));
    }

    #[test]
    fn ancestor_sorts_before_subdomain() {
        assert!(d("com") < d("duck.com"));
        assert!(d("duck.com") < d("alter.duck.com"));
        assert!(d("com") < d("alter.duck.com"));
    }

    #[test]
    fn shorter_last_label_sorts_first() {
        // ".ru" < ".cru": the shorter label runs out while matching.
        assert!(d("ru") < d("cru"));
        assert!(d("a.ru") < d("a.cru"));
    }

    #[test]
    fn separator_is_below_every_other_byte() {
        // Plain reversed-string order would put "x-y.com" first since '-' < '.'.
        assert!(d("sub.y.com") < d("x-y.com"));
        assert!(d("y.com") < d("sub.y.com"));
        assert!(d("y.com") < d("x-y.com"));
        assert!(d("a.b") < d("!b"));
        assert!(d("a.b") < d("\u{7f}b"));
    }

    #[test]
    fn separator_against_separator_keeps_walking() {
        assert!(d("a.com") < d("b.com"));
        assert!(d("b.a.com") > d("a.a.com"));
    }

    #[test]
    fn last_label_decides_first() {
        assert!(d("zzz.com") < d("aaa.ru"));
        assert!(d("maps.me") < d("gdz.ru"));
    }

    #[test]
    fn reverse_label_cmp_equal_only_for_identical_names() {
        assert_eq!(d("duck.com").reverse_label_cmp(&d("duck.com")), Ordering::Equal);
        assert_ne!(d("duck.com").reverse_label_cmp(&d("dock.com")), Ordering::Equal);
        assert_ne!(d("com").reverse_label_cmp(&d(".com")), Ordering::Equal);
    }

    #[test]
    fn reverse_label_cmp_is_antisymmetric() {
        let names = ["com", "duck.com", "x-y.com", "y.com", "sub.y.com", "ru", "cru", ".", ""];
        for a in names {
            for b in names {
                assert_eq!(
                    d(a).reverse_label_cmp(&d(b)),
                    d(b).reverse_label_cmp(&d(a)).reverse(),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn subdomain_implies_greater() {
        let names = ["com", "duck.com", "alt.duck.com", "y.com", "x-y.com", "sub.y.com", "ru"];
        for a in names {
            for b in names {
                let (a, b) = (d(a), d(b));
                if a.is_subdomain_of(&b) && a != b {
                    assert!(b < a, "{b} should sort before {a}");
                }
            }
        }
    }

    #[test]
    fn parses_from_str() {
        let domain: Domain = "maps.me".parse().unwrap();

        assert_eq!(domain, Domain::from("maps.me"));
        assert_eq!(domain, Domain::from(String::from("maps.me")));
    }
}
