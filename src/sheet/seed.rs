// Initial sheet contents
//
// Five populated job requests followed by blank rows. Values are reproduced
// exactly; golden-output checks (`ordersheet dump`) depend on them.

use super::store::Row;

/// Number of empty rows appended after the seed records
pub const BLANK_ROWS: u32 = 20;

type SeedRecord = [(&'static str, &'static str); 9];

const SEED: [SeedRecord; 5] = [
    [
        ("job-request", "Launch social media campaign for pro..."),
        ("submitted", "15-11-2024"),
        ("status", "in-process"),
        ("submitter", "Aisha Patel"),
        ("url", "www.aishapatel..."),
        ("assigned", "Sophie Choudury"),
        ("priority", "Medium"),
        ("due-date", "20-11-2024"),
        ("est-value", "6,200,000 ₹"),
    ],
    [
        ("job-request", "Update press kit for company redesign"),
        ("submitted", "28-10-2024"),
        ("status", "need to start"),
        ("submitter", "Irfan Khan"),
        ("url", "www.irfankhanp..."),
        ("assigned", "Tejas Pandey"),
        ("priority", "High"),
        ("due-date", "30-10-2024"),
        ("est-value", "3,500,000 ₹"),
    ],
    [
        ("job-request", "Finalize user testing feedback for app..."),
        ("submitted", "05-12-2024"),
        ("status", "in-process"),
        ("submitter", "Mark Johnson"),
        ("url", "www.markjohns..."),
        ("assigned", "Rachel Lee"),
        ("priority", "Medium"),
        ("due-date", "10-12-2024"),
        ("est-value", "4,750,000 ₹"),
    ],
    [
        ("job-request", "Design new features for the website"),
        ("submitted", "10-01-2025"),
        ("status", "Complete"),
        ("submitter", "Emily Green"),
        ("url", "www.emilygreen..."),
        ("assigned", "Tom Wright"),
        ("priority", "Low"),
        ("due-date", "15-01-2025"),
        ("est-value", "5,900,000 ₹"),
    ],
    [
        ("job-request", "Prepare financial report for Q4"),
        ("submitted", "25-01-2025"),
        ("status", "Blocked"),
        ("submitter", "Jessica Brown"),
        ("url", "www.jessicabro..."),
        ("assigned", "Kevin Smith"),
        ("priority", "Low"),
        ("due-date", "30-01-2025"),
        ("est-value", "2,800,000 ₹"),
    ],
];

pub(super) fn seed_rows() -> Vec<Row> {
    let seeded = SEED
        .iter()
        .zip(1u32..)
        .map(|(record, id)| Row::new(id, record));

    let first_blank = SEED.len() as u32 + 1;
    let blanks = (first_blank..first_blank + BLANK_ROWS).map(|id| Row::new(id, &[]));

    seeded.chain(blanks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let ids: Vec<u32> = seed_rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }
}
