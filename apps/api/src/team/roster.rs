//! Team roster data and the record-to-card mapping.
//!
//! The roster is a fixed ordered list. Each record renders independently
//! into one presentational card; no state, no lifecycle, no relationship
//! between records.

use serde::Serialize;

/// Fallback image served when a record carries no photo of its own.
pub const DEFAULT_PHOTO: &str = "/assets/team/default-avatar.png";

/// One team-member record. Static for the process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub photo_url: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub email: &'static str,
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Aaron Sonnie",
        role: "Founder & Backend Developer",
        bio: "Passionate backend developer with expertise in building scalable, \
              efficient, and secure systems.",
        photo_url: "/lovable-uploads/7ac96ef4-2820-482a-ae2e-a05176205147.png",
        linkedin: "https://linkedin.com/in/aaronsonnie",
        github: "https://github.com/aaronsonnie",
        email: "aaron@aptora.com",
    },
    TeamMember {
        name: "Karivaradhan",
        role: "Founder & TeamLead",
        bio: "Passionate about creating innovative educational solutions. Leads the \
              technical development and strategic direction of Aptora.",
        photo_url: "/lovable-uploads/b94a9ece-7e3f-42eb-bc23-a5eb21a13b71.png",
        linkedin: "https://linkedin.com/in/karivaradhan",
        github: "https://github.com/karivaradhan",
        email: "kari@aptora.com",
    },
    TeamMember {
        name: "Sona Daison",
        role: "Founder & Frontend Developer",
        bio: "Creates beautiful, intuitive interfaces that make learning engaging \
              and accessible for all users.",
        photo_url: "/lovable-uploads/0486d9ae-e6fa-4ba8-89e7-2a8e9e37b657.png",
        linkedin: "https://linkedin.com/in/sonadaison",
        github: "https://github.com/sonadaison",
        email: "sona@aptora.com",
    },
    TeamMember {
        name: "Thrithwik",
        role: "Co-Founder & Developer",
        bio: "Develops the robust infrastructure that powers Aptora's AI learning \
              capabilities and data processing.",
        photo_url: "/assets/thrithwik.jpg",
        linkedin: "https://linkedin.com/in/thrithwik",
        github: "https://github.com/thrithwik",
        email: "thrithwik@aptora.com",
    },
];

/// Presentational card for one roster record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo_url: String,
    pub linkedin: String,
    pub github: String,
    pub email: String,
}

impl TeamCard {
    /// Maps a record to its card. The only transformation is the
    /// missing-photo fallback; every other field passes through verbatim.
    pub fn from_member(member: &TeamMember) -> Self {
        let photo_url = if member.photo_url.trim().is_empty() {
            DEFAULT_PHOTO
        } else {
            member.photo_url
        };

        TeamCard {
            name: member.name.to_string(),
            role: member.role.to_string(),
            bio: member.bio.to_string(),
            photo_url: photo_url.to_string(),
            linkedin: member.linkedin.to_string(),
            github: member.github.to_string(),
            email: member.email.to_string(),
        }
    }
}

/// Renders the whole roster, one card per record, in roster order.
pub fn render_cards() -> Vec<TeamCard> {
    TEAM.iter().map(TeamCard::from_member).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_exactly_one_card_per_record() {
        assert_eq!(render_cards().len(), TEAM.len());
    }

    #[test]
    fn test_cards_carry_record_fields_verbatim_in_order() {
        let cards = render_cards();
        for (member, card) in TEAM.iter().zip(&cards) {
            assert_eq!(card.name, member.name);
            assert_eq!(card.role, member.role);
            assert_eq!(card.bio, member.bio);
            assert_eq!(card.linkedin, member.linkedin);
            assert_eq!(card.github, member.github);
            assert_eq!(card.email, member.email);
        }
    }

    #[test]
    fn test_outbound_links_are_absolute_and_emails_routable() {
        for card in render_cards() {
            assert!(card.linkedin.starts_with("https://"));
            assert!(card.github.starts_with("https://"));
            assert!(card.email.contains('@'));
        }
    }

    #[test]
    fn test_missing_photo_falls_back_to_default() {
        let member = TeamMember {
            name: "New Hire",
            role: "Intern",
            bio: "Joined yesterday.",
            photo_url: "",
            linkedin: "https://linkedin.com/in/newhire",
            github: "https://github.com/newhire",
            email: "new@aptora.com",
        };
        let card = TeamCard::from_member(&member);
        assert_eq!(card.photo_url, DEFAULT_PHOTO);
    }

    #[test]
    fn test_present_photo_is_not_replaced() {
        let card = TeamCard::from_member(&TEAM[0]);
        assert_eq!(card.photo_url, TEAM[0].photo_url);
    }
}
