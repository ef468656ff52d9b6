use crate::models::MemberNameIndex;

/// A member name resolved against the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    /// Canonical upper-cased full name
    pub name: String,
    pub member_id: u64,
}

/// Resolve a surname to a member whose canonical name ends with it.
///
/// Ties are broken by shortest full name, then lexicographic order, so an
/// exact surname always beats a longer name sharing the suffix.
pub fn resolve_member(surname: &str, index: &MemberNameIndex) -> Option<ResolvedMember> {
    let needle = surname.trim().to_uppercase();
    if needle.is_empty() {
        return None;
    }

    index
        .iter()
        .filter(|(name, _)| name.ends_with(&needle))
        .min_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .map(|(name, member_id)| ResolvedMember {
            name: name.to_string(),
            member_id,
        })
}
