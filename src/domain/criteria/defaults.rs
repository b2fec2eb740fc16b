//! Built-in job-offer criteria used when no catalog file is configured.

use once_cell::sync::Lazy;

use super::{Criterion, Polarity};

fn five_step(id: &str, name: &str, polarity: Polarity, labels: [&str; 5]) -> Criterion {
    labels
        .iter()
        .enumerate()
        .fold(Criterion::new(id, name, polarity), |criterion, (i, label)| {
            criterion.with_option(*label, (i + 1) as f64)
        })
}

/// The ten default job-offer criteria, each scored 1 to 5.
pub static JOB_OFFER_CRITERIA: Lazy<Vec<Criterion>> = Lazy::new(|| {
    vec![
        five_step(
            "C1",
            "Education",
            Polarity::Benefit,
            ["High school", "Diploma", "Bachelor", "Master", "Doctorate"],
        ),
        five_step(
            "C2",
            "Work Experience",
            Polarity::Benefit,
            ["< 1 year", "1 - 2 years", "3 - 5 years", "6 - 10 years", "> 10 years"],
        ),
        five_step(
            "C3",
            "Skill Match",
            Polarity::Benefit,
            [
                "Unrelated field",
                "Partially matching",
                "Matching",
                "Strongly matching",
                "Specialist / professional",
            ],
        ),
        // Option values grow as the commute shrinks.
        five_step(
            "C4",
            "Distance from Home",
            Polarity::Cost,
            ["> 50 km", "31 - 50 km", "21 - 30 km", "11 - 20 km", "<= 10 km"],
        ),
        five_step(
            "C5",
            "Salary",
            Polarity::Benefit,
            [
                "< 3,000,000",
                "3,000,000 - 4,999,999",
                "5,000,000 - 6,999,999",
                "7,000,000 - 9,999,999",
                ">= 10,000,000",
            ],
        ),
        five_step(
            "C6",
            "Age",
            Polarity::Cost,
            ["> 45 years", "36 - 45 years", "26 - 35 years", "21 - 25 years", "<= 20 years"],
        ),
        five_step(
            "C7",
            "Employment Status",
            Polarity::Benefit,
            [
                "Freelance",
                "Internship",
                "Contract",
                "Permanent",
                "Permanent with benefits",
            ],
        ),
        five_step(
            "C8",
            "Working Hours",
            Polarity::Benefit,
            [
                "Night shift",
                "Rotating shifts",
                "Flexible",
                "Fixed regular hours",
                "Fixed with paid overtime",
            ],
        ),
        five_step(
            "C9",
            "Company Reputation",
            Polarity::Benefit,
            [
                "Poor (< 2.5)",
                "Fair (2.5 - 3.0)",
                "Good (3.1 - 3.9)",
                "Very good (4.0 - 4.5)",
                "Excellent (>= 4.6)",
            ],
        ),
        five_step(
            "C10",
            "Career Opportunities",
            Polarity::Benefit,
            [
                "No promotion",
                "Minor promotion",
                "Moderate promotion",
                "Fast promotion",
                "Very high career growth",
            ],
        ),
    ]
});
