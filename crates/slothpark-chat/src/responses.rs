//! Canned mascot replies and random selection.

use rand::Rng;

use crate::types::ResponseCategory;

const GREETINGS: &[&str] = &[
    "Hello... I'm... Sammy... the... Sloth... Welcome... to... Sloth... Park...",
    "Hi... there... I'm... here... to... help... you... learn... about... Sloth... Park...",
    "Welcome... friend... to... the... slowest... place... on... Earth...",
];

const ABOUT: &[&str] = &[
    "Sloth... Park... is... a... sanctuary... for... sloths... from... around... the... world... We... have... over... 25... different... sloths... here...",
    "Our... park... was... founded... in... 2015... to... protect... and... preserve... sloth... habitats... and... educate... visitors...",
];

const TOURS: &[&str] = &[
    "We... offer... three... tours... The... Canopy... Crawl... The... Slow... Safari... and... The... Night... Watcher... All... tours... include... a... sloth... encounter...",
    "Our... most... popular... tour... is... The... Canopy... Crawl... where... you... can... see... sloths... in... their... natural... habitat... high... in... the... trees...",
];

const HOURS: &[&str] = &[
    "We're... open... daily... from... 9am... to... 5pm... Last... tour... starts... at... 3:30pm...",
    "The... Night... Watcher... tour... runs... on... Fridays... and... Saturdays... from... 7pm... to... 9pm...",
];

const TICKETS: &[&str] = &[
    "Tickets... are... $25... for... adults... $15... for... children... under... 12... and... free... for... children... under... 3...",
    "You... can... book... tickets... online... or... at... the... entrance... We... recommend... booking... in... advance... especially... for... weekend... visits...",
];

const FACTS: &[&str] = &[
    "Did... you... know... sloths... sleep... for... 15... to... 20... hours... every... day?",
    "Sloths... are... excellent... swimmers... and... can... hold... their... breath... underwater... for... up... to... 40... minutes...",
    "Sloths... move... so... slowly... that... algae... grows... on... their... fur... giving... them... a... greenish... appearance...",
    "A... sloth... can... turn... its... head... almost... 180... degrees...",
    "Sloths... only... come... down... from... trees... once... a... week... to... use... the... bathroom...",
];

const DEFAULT: &[&str] = &[
    "I'm... thinking... very... slowly... about... that... Can... you... ask... about... our... tours... or... sloth... facts?",
    "Hmm... that's... an... interesting... question... I... know... most... about... Sloth... Park... tours... and... sloth... facts...",
    "I'm... not... sure... about... that... Would... you... like... to... know... about... our... visiting... hours... or... ticket... prices?",
];

/// The fixed, non-empty list of replies for a category.
pub fn candidates(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::Greeting => GREETINGS,
        ResponseCategory::About => ABOUT,
        ResponseCategory::Tours => TOURS,
        ResponseCategory::Hours => HOURS,
        ResponseCategory::Tickets => TICKETS,
        ResponseCategory::Facts => FACTS,
        ResponseCategory::Default => DEFAULT,
    }
}

/// Pick a reply uniformly at random using the thread-local generator.
pub fn select(category: ResponseCategory) -> &'static str {
    select_with(category, &mut rand::rng())
}

/// Pick a reply uniformly at random from the given generator.
pub fn select_with<R: Rng + ?Sized>(category: ResponseCategory, rng: &mut R) -> &'static str {
    let replies = candidates(category);
    replies[rng.random_range(0..replies.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_replies() {
        for category in ResponseCategory::ALL {
            assert!(!candidates(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn test_candidate_counts() {
        assert_eq!(candidates(ResponseCategory::Greeting).len(), 3);
        assert_eq!(candidates(ResponseCategory::About).len(), 2);
        assert_eq!(candidates(ResponseCategory::Tours).len(), 2);
        assert_eq!(candidates(ResponseCategory::Hours).len(), 2);
        assert_eq!(candidates(ResponseCategory::Tickets).len(), 2);
        assert_eq!(candidates(ResponseCategory::Facts).len(), 5);
        assert_eq!(candidates(ResponseCategory::Default).len(), 3);
    }

    #[test]
    fn test_select_is_member_of_candidates() {
        for category in ResponseCategory::ALL {
            for _ in 0..50 {
                let reply = select(category);
                assert!(candidates(category).contains(&reply));
            }
        }
    }

    #[test]
    fn test_select_with_seeded_rng_reaches_every_fact() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..500)
            .map(|_| select_with(ResponseCategory::Facts, &mut rng))
            .collect();
        assert_eq!(seen.len(), candidates(ResponseCategory::Facts).len());
    }

    #[test]
    fn test_replies_use_slow_cadence() {
        for category in ResponseCategory::ALL {
            for reply in candidates(category) {
                assert!(reply.contains("... "), "{reply}");
            }
        }
    }
}
