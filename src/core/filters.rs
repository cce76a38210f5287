use crate::models::MentorProfile;

/// Check whether a mentor may be scored at all
///
/// Mentors that are not accepting mentees, or that are at or over capacity,
/// are excluded before scoring rather than ranked with a zero availability score.
/// The store is asked only for accepting mentors, but the capacity comparison
/// is repeated here because not every store can compare two columns.
#[inline]
pub fn is_eligible(mentor: &MentorProfile) -> bool {
    mentor.has_capacity()
}

/// Keep only eligible mentors, preserving fetch order
pub fn eligible_mentors(mentors: Vec<MentorProfile>) -> Vec<MentorProfile> {
    mentors.into_iter().filter(is_eligible).collect()
}
