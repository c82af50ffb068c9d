//! Domain catalog — the four fixed internship offerings
//!
//! Records are defined at compile time and never created or destroyed at
//! runtime. Lookups by untyped key go through [`DomainId::from_str`], which
//! is the single "not found" gate; callers treat a failed parse as a no-op.

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Stable identifier for an internship domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DomainId {
    AiMl,
    Cybersecurity,
    Cloud,
    FullStack,
}

impl DomainId {
    /// All domain ids in catalog order
    pub const ALL: [DomainId; 4] = [
        DomainId::AiMl,
        DomainId::Cybersecurity,
        DomainId::Cloud,
        DomainId::FullStack,
    ];

    /// The stable string key for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiMl => "aiml",
            Self::Cybersecurity => "cybersecurity",
            Self::Cloud => "cloud",
            Self::FullStack => "fullstack",
        }
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aiml" => Ok(Self::AiMl),
            "cybersecurity" => Ok(Self::Cybersecurity),
            "cloud" => Ok(Self::Cloud),
            "fullstack" => Ok(Self::FullStack),
            other => Err(DomainError::UnknownDomain(other.to_string())),
        }
    }
}

/// One internship domain as shown on the home and detail views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainDescriptor {
    pub id: DomainId,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub skills: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub image_url: &'static str,
}

impl DomainDescriptor {
    /// File name for the simulated course-content download:
    /// title with whitespace runs replaced by underscores.
    pub fn pdf_file_name(&self) -> String {
        let underscored: Vec<&str> = self.title.split_whitespace().collect();
        format!("{}_Course_Content.pdf", underscored.join("_"))
    }
}

/// A simulated download request for a placeholder course-content PDF.
///
/// No file is ever produced; the request is recorded and surfaced to the
/// user, standing in for a real document-delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub domain: DomainId,
    pub file_name: String,
}

impl DownloadRequest {
    pub fn for_domain(descriptor: &DomainDescriptor) -> Self {
        Self {
            domain: descriptor.id,
            file_name: descriptor.pdf_file_name(),
        }
    }
}

/// Program highlights shown on every detail view
pub const PROGRAM_HIGHLIGHTS: [&str; 3] = [
    "3-6 months internship duration",
    "Mentorship from industry experts",
    "Certificate of completion",
];

const DOMAINS: [DomainDescriptor; 4] = [
    DomainDescriptor {
        id: DomainId::AiMl,
        title: "AI/ML",
        short_description: "Dive into Artificial Intelligence and Machine Learning technologies",
        long_description: "Explore the fascinating world of Artificial Intelligence and Machine \
            Learning. Work on cutting-edge projects involving neural networks, deep learning, \
            data analysis, and intelligent systems. Gain hands-on experience with popular \
            frameworks and tools used in the industry.",
        skills: &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Data Analysis",
            "Neural Networks",
            "Computer Vision",
        ],
        opportunities: &[
            "AI Research Assistant",
            "ML Engineer Intern",
            "Data Scientist Trainee",
            "AI Product Development",
        ],
        image_url: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg",
    },
    DomainDescriptor {
        id: DomainId::Cybersecurity,
        title: "Cybersecurity",
        short_description: "Protect digital assets and learn advanced security techniques",
        long_description: "Enter the critical field of cybersecurity where you'll learn to \
            protect organizations from digital threats. Gain expertise in ethical hacking, \
            network security, incident response, and security analysis. Work with \
            industry-standard tools and learn best practices in information security.",
        skills: &[
            "Network Security",
            "Ethical Hacking",
            "Incident Response",
            "Security Analysis",
            "Penetration Testing",
            "Risk Assessment",
        ],
        opportunities: &[
            "Security Analyst Intern",
            "Cybersecurity Consultant",
            "SOC Analyst Trainee",
            "Security Researcher",
        ],
        image_url: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg",
    },
    DomainDescriptor {
        id: DomainId::Cloud,
        title: "Cloud Computing",
        short_description: "Master cloud technologies and scalable infrastructure solutions",
        long_description: "Discover the power of cloud computing with hands-on experience in \
            AWS, Azure, and Google Cloud. Learn about cloud architecture, containerization, \
            serverless computing, and DevOps practices. Build scalable applications and \
            understand modern infrastructure management.",
        skills: &[
            "AWS/Azure/GCP",
            "Docker & Kubernetes",
            "DevOps",
            "Serverless Computing",
            "Cloud Architecture",
            "Infrastructure as Code",
        ],
        opportunities: &[
            "Cloud Engineer Intern",
            "DevOps Trainee",
            "Cloud Solutions Architect",
            "Site Reliability Engineer",
        ],
        image_url: "https://images.pexels.com/photos/325229/pexels-photo-325229.jpeg",
    },
    DomainDescriptor {
        id: DomainId::FullStack,
        title: "Full Stack Development",
        short_description: "Build complete web applications from frontend to backend",
        long_description: "Become a versatile full-stack developer by mastering both frontend \
            and backend technologies. Work with modern frameworks like React, Node.js, and \
            databases to create complete web applications. Learn about API development, \
            database design, and user experience principles.",
        skills: &[
            "React/Angular/Vue",
            "Node.js/Python/Java",
            "Database Design",
            "RESTful APIs",
            "Version Control",
            "Responsive Design",
        ],
        opportunities: &[
            "Full Stack Developer Intern",
            "Web Developer Trainee",
            "Software Engineer Intern",
            "Frontend/Backend Developer",
        ],
        image_url: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg",
    },
];

/// The fixed domain catalog
pub struct Catalog;

impl Catalog {
    /// All domains, in display order
    pub fn all() -> &'static [DomainDescriptor] {
        &DOMAINS
    }

    /// Look up a domain by id. Total over the enum, so this never fails.
    pub fn find(id: DomainId) -> &'static DomainDescriptor {
        // DOMAINS shares DomainId::ALL's order
        match id {
            DomainId::AiMl => &DOMAINS[0],
            DomainId::Cybersecurity => &DOMAINS[1],
            DomainId::Cloud => &DOMAINS[2],
            DomainId::FullStack => &DOMAINS[3],
        }
    }

    /// Look up a domain by its untyped string key
    pub fn find_by_key(key: &str) -> Option<&'static DomainDescriptor> {
        key.parse::<DomainId>().ok().map(Self::find)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_domains_in_order() {
        let all = Catalog::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, DomainId::AiMl);
        assert_eq!(all[1].id, DomainId::Cybersecurity);
        assert_eq!(all[2].id, DomainId::Cloud);
        assert_eq!(all[3].id, DomainId::FullStack);
    }

    #[test]
    fn test_find_returns_matching_descriptor() {
        let descriptor = Catalog::find(DomainId::Cybersecurity);
        assert_eq!(descriptor.title, "Cybersecurity");
        assert_eq!(descriptor.id, DomainId::Cybersecurity);
    }

    #[test]
    fn test_find_by_key_known() {
        let descriptor = Catalog::find_by_key("cloud").unwrap();
        assert_eq!(descriptor.title, "Cloud Computing");
    }

    #[test]
    fn test_find_by_key_unknown_is_none() {
        assert!(Catalog::find_by_key("basketweaving").is_none());
        assert!(Catalog::find_by_key("").is_none());
    }

    #[test]
    fn test_domain_id_round_trip() {
        for id in DomainId::ALL {
            assert_eq!(id.as_str().parse::<DomainId>().unwrap(), id);
        }
    }

    #[test]
    fn test_domain_id_parse_unknown() {
        let err = "webdev".parse::<DomainId>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown domain: webdev");
    }

    #[test]
    fn test_pdf_file_name_no_spaces() {
        let descriptor = Catalog::find(DomainId::AiMl);
        assert_eq!(descriptor.pdf_file_name(), "AI/ML_Course_Content.pdf");
    }

    #[test]
    fn test_pdf_file_name_spaces_become_underscores() {
        let descriptor = Catalog::find(DomainId::FullStack);
        assert_eq!(
            descriptor.pdf_file_name(),
            "Full_Stack_Development_Course_Content.pdf"
        );

        let cloud = Catalog::find(DomainId::Cloud);
        assert_eq!(cloud.pdf_file_name(), "Cloud_Computing_Course_Content.pdf");
    }

    #[test]
    fn test_download_request_for_domain() {
        let request = DownloadRequest::for_domain(Catalog::find(DomainId::AiMl));
        assert_eq!(request.domain, DomainId::AiMl);
        assert_eq!(request.file_name, "AI/ML_Course_Content.pdf");
    }

    #[test]
    fn test_descriptors_are_complete() {
        for descriptor in Catalog::all() {
            assert!(!descriptor.title.is_empty());
            assert!(!descriptor.short_description.is_empty());
            assert!(!descriptor.long_description.is_empty());
            assert!(!descriptor.skills.is_empty());
            assert!(!descriptor.opportunities.is_empty());
            assert!(descriptor.image_url.starts_with("https://"));
        }
    }
}
