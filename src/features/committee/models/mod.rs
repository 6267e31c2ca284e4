mod committee_member;

pub use committee_member::CommitteeMember;
