//! Built-in sample dataset
//!
//! Five cardiologists with overlapping publication records; used when no
//! data file is configured.

use super::profile::Profile;
use super::store::ProfileStore;

const SAMPLE: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "hcp-1",
        "Dr. Emily Carter",
        "Stanford University School of Medicine",
        "Chief of Cardiology at General Hospital",
        &[
            "The Future of Heart Disease Treatment",
            "Advanced Cardiac Imaging Techniques",
            "Genetics in Cardiology",
        ],
    ),
    (
        "hcp-2",
        "Dr. Ben Zhao",
        "Johns Hopkins University",
        "Senior Cardiologist at City Clinic",
        &[
            "Advanced Cardiac Imaging Techniques",
            "Case Studies in Myocardial Infarction",
        ],
    ),
    (
        "hcp-3",
        "Dr. Sofia Reyes",
        "Harvard Medical School",
        "Pediatric Cardiologist at Children's Hospital",
        &[
            "Congenital Heart Defects in Newborns",
            "The Future of Heart Disease Treatment",
        ],
    ),
    (
        "hcp-4",
        "Dr. Kenji Tanaka",
        "University of Tokyo",
        "Researcher at The Heart Institute",
        &[
            "Genetics in Cardiology",
            "Advanced Cardiac Imaging Techniques",
        ],
    ),
    (
        "hcp-5",
        "Dr. Maria Garcia",
        "University of Barcelona",
        "Cardiologist at Mercy West",
        &["Preventive Cardiology Strategies"],
    ),
];

/// The sample profiles in their canonical order
pub fn sample_profiles() -> Vec<Profile> {
    SAMPLE
        .iter()
        .map(|(id, name, education, experience, pubs)| {
            Profile::new(*id, *name, pubs.iter().map(|p| p.to_string()).collect())
                .with_education(*education)
                .with_experience(*experience)
        })
        .collect()
}

impl ProfileStore {
    /// Store preloaded with the sample dataset
    pub fn sample() -> Self {
        Self::from_profiles(sample_profiles()).unwrap_or_default()
    }
}
