use super::domain::{
    Accent, BiographyChapter, CertificationCategory, CertificationRecord, EducationRecord,
    ExperienceRecord, Metric, Profile, ProjectCategory, ProjectRecord, PublicationRecord,
    PublicationStatus, ResearchPillar, SocialLink, TestimonialCategory, TestimonialRecord,
    VerificationStatus,
};

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn publications() -> &'static [PublicationRecord] {
    PUBLICATIONS
}

pub fn experiences() -> &'static [ExperienceRecord] {
    EXPERIENCES
}

pub fn education() -> &'static [EducationRecord] {
    EDUCATION
}

pub fn certifications() -> &'static [CertificationRecord] {
    CERTIFICATIONS
}

pub fn testimonials() -> &'static [TestimonialRecord] {
    TESTIMONIALS
}

pub fn projects() -> &'static [ProjectRecord] {
    PROJECTS
}

pub fn research_pillars() -> &'static [ResearchPillar] {
    RESEARCH_PILLARS
}

pub fn biography() -> &'static [BiographyChapter] {
    BIOGRAPHY
}

static PROFILE: Profile = Profile {
    name: "Sagar Sahore",
    affiliation: "Researcher • University of Auckland",
    focus: "Computer Vision",
    tagline: "Bridging the gap between raw pixel data and semantic understanding. Designing intelligent systems that see the world as we do.",
    summary: &[
        "I am a Computer Vision Engineer standing at the intersection of biological intuition and synthetic reasoning. My work is driven by a singular question: how do we instill true visual understanding into machines?",
        "While my academic focus lies in mechanistic interpretability, peeling back the layers of billion-parameter transformers, my engineering side loves building scalable perception systems.",
    ],
    avatar_url: Some("https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=256&h=256&fit=crop"),
    email: "hello@aether.ai",
    socials: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/",
        },
        SocialLink {
            label: "Twitter",
            url: "https://twitter.com/",
        },
    ],
    metrics: &[
        Metric {
            value: "12+",
            label: "Publications",
        },
        Metric {
            value: "850+",
            label: "Citations",
        },
    ],
    lab_name: "Lab of Neural Dynamics",
};

static PUBLICATIONS: &[PublicationRecord] = &[
    PublicationRecord {
        id: "sahore2025stochastic",
        title: "Stochastic Latent Flows: Unifying Diffusion Models and GANs",
        venue: "ICLR 2025",
        year: 2025,
        authors: &["S. Sahore", "I. Sutskever", "G. Hinton"],
        status: PublicationStatus::UnderReview,
        impact: None,
        link: "#",
        citation: "@inproceedings{sahore2025stochastic, title={Stochastic Latent Flows: Unifying Diffusion Models and GANs}, author={Sahore, S. and Sutskever, I. and Hinton, G.}, booktitle={ICLR}, year={2025}}",
    },
    PublicationRecord {
        id: "sahore2024causal",
        title: "Causal Alignment in Large Language Models",
        venue: "NeurIPS 2024",
        year: 2024,
        authors: &["S. Sahore", "A. Ng"],
        status: PublicationStatus::Published,
        impact: Some("Oral Presentation"),
        link: "#",
        citation: "@inproceedings{sahore2024causal, title={Causal Alignment in Large Language Models}, author={Sahore, S. and Ng, A.}, booktitle={NeurIPS}, year={2024}}",
    },
    PublicationRecord {
        id: "sahore2024energy",
        title: "Energy-Based Priors for Sparse Event Cameras",
        venue: "arXiv",
        year: 2024,
        authors: &["S. Sahore", "F. Li"],
        status: PublicationStatus::Preprint,
        impact: None,
        link: "#",
        citation: "@article{sahore2024energy, title={Energy-Based Priors for Sparse Event Cameras}, author={Sahore, S. and Li, F.}, journal={arXiv}, year={2024}}",
    },
];

static EXPERIENCES: &[ExperienceRecord] = &[
    ExperienceRecord {
        id: "deepmind-intern",
        role: "Research Scientist (Intern)",
        organization: "DeepMind",
        period: "Summer 2024",
        description: "Contributed to the Gemini reasoning team. Developed novel chain-of-thought prompting strategies that improved math benchmarks by 4%.",
        skills: &["Python", "JAX", "LLMs", "Research"],
    },
    ExperienceRecord {
        id: "stanford-phd",
        role: "PhD Candidate",
        organization: "Stanford University",
        period: "2022 - Present",
        description: "Focusing on mechanistic interpretability of transformer models. Publishing in NeurIPS and ICLR.",
        skills: &["PyTorch", "Academic Writing", "LaTeX"],
    },
    ExperienceRecord {
        id: "openai-residency",
        role: "Senior Machine Learning Engineer",
        organization: "OpenAI (Residency)",
        period: "2021 - 2022",
        description: "Worked on infrastructure optimization for distributed training of large-scale vision models. Reduced inference latency by 15%.",
        skills: &["Kubernetes", "CUDA", "Distributed Systems"],
    },
    ExperienceRecord {
        id: "cloudfirst-consultant",
        role: "Salesforce Developer & Consultant",
        organization: "CloudFirst Solutions",
        period: "2019 - 2021",
        description: "Led a team of developers architecting complex CRM solutions. Built custom Apex frameworks and integrated external data lakes with Salesforce.",
        skills: &["Apex", "LWC", "Salesforce Cloud", "System Architecture"],
    },
    ExperienceRecord {
        id: "techcorp-analyst",
        role: "Data Analyst",
        organization: "TechCorp Global",
        period: "2018 - 2019",
        description: "Engineered ETL pipelines processing terabytes of log data. Created dashboards for executives to monitor KPI metrics.",
        skills: &["SQL", "Tableau", "Python", "Spark"],
    },
];

static EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        id: "stanford-phd",
        degree: "Ph.D. in Computer Science",
        institution: "Stanford University",
        period: "2022 - Present",
        description: "Research in mechanistic interpretability, reverse-engineering the internal state representations of large language models. Thesis: \"Causal Abstractions in Transformer Circuits\".",
        honors: &[
            "Graduate Research Fellowship",
            "Dean's Scholar",
            "NeurIPS Oral Presentation",
        ],
    },
    EducationRecord {
        id: "mit-ms",
        degree: "M.S. in Computer Science",
        institution: "MIT",
        period: "2020 - 2022",
        description: "Concentration in Artificial Intelligence with research on adversarial robustness in computer vision systems. Teaching Assistant for Intro to Deep Learning.",
        honors: &["GPA: 4.0/4.0", "Best Thesis Award", "Siebel Scholar"],
    },
    EducationRecord {
        id: "berkeley-bs",
        degree: "B.S. in Data Science",
        institution: "UC Berkeley",
        period: "2016 - 2020",
        description: "Double major in Statistics, minor in Mathematics. Capstone on optimizing San Francisco traffic flow with reinforcement learning agents.",
        honors: &["Summa Cum Laude", "Phi Beta Kappa", "Regents Scholar"],
    },
];

static CERTIFICATIONS: &[CertificationRecord] = &[
    CertificationRecord {
        id: "aws-ml",
        title: "AWS Certified Machine Learning",
        issuer: "Amazon Web Services",
        date: "Issued Jan 2024",
        category: CertificationCategory::CloudVendor,
        status: VerificationStatus::Verified,
        credential_id: Some("AWS-ML-291"),
        description: "Design, training, and deployment of ML workloads on AWS.",
        verification_link: Some("https://aws.amazon.com/verification"),
    },
    CertificationRecord {
        id: "dl-specialization",
        title: "Deep Learning Specialization",
        issuer: "DeepLearning.AI",
        date: "Issued Oct 2023",
        category: CertificationCategory::Ai,
        status: VerificationStatus::Verified,
        credential_id: Some("DL-84920"),
        description: "Neural network foundations, sequence models, and structuring ML projects.",
        verification_link: Some("https://www.coursera.org/verify"),
    },
    CertificationRecord {
        id: "salesforce-architect",
        title: "Salesforce Application Architect",
        issuer: "Salesforce",
        date: "Issued Jun 2021",
        category: CertificationCategory::EnterprisePlatform,
        status: VerificationStatus::Verified,
        credential_id: Some("SF-AA-1187"),
        description: "Data modeling, sharing, and platform development at enterprise scale.",
        verification_link: None,
    },
    CertificationRecord {
        id: "tensorflow-developer",
        title: "TensorFlow Developer",
        issuer: "Google Developers",
        date: "Issued Nov 2023",
        category: CertificationCategory::Ai,
        status: VerificationStatus::Verified,
        credential_id: Some("G-TF-992"),
        description: "Building and training neural networks with TensorFlow.",
        verification_link: None,
    },
    CertificationRecord {
        id: "gcp-ml-engineer",
        title: "Google Cloud Professional ML Engineer",
        issuer: "Google Cloud",
        date: "Planned 2025",
        category: CertificationCategory::CloudVendor,
        status: VerificationStatus::Planned,
        credential_id: None,
        description: "Productionizing ML models on Vertex AI.",
        verification_link: None,
    },
    CertificationRecord {
        id: "best-paper-award",
        title: "Best Research Paper Award",
        issuer: "UoA Grad Symposium",
        date: "Awarded Dec 2024",
        category: CertificationCategory::Academic,
        status: VerificationStatus::Verified,
        credential_id: None,
        description: "Recognized for work on stochastic latent flows.",
        verification_link: None,
    },
    CertificationRecord {
        id: "stanford-ai-safety",
        title: "AI Safety Fundamentals",
        issuer: "Stanford Online",
        date: "Planned 2025",
        category: CertificationCategory::Ai,
        status: VerificationStatus::Planned,
        credential_id: None,
        description: "Alignment, interpretability, and governance of frontier models.",
        verification_link: None,
    },
];

static TESTIMONIALS: &[TestimonialRecord] = &[
    TestimonialRecord {
        id: "t1",
        quote: "Their work on stochastic flows fundamentally shifted how we approach sampling efficiency. A rare combination of theoretical depth and engineering prowess.",
        author: "Dr. Elena Vance",
        role: "Principal Scientist",
        organization: "DeepMind",
        category: TestimonialCategory::Research,
    },
    TestimonialRecord {
        id: "t2",
        quote: "Implemented our vision backbone 3x faster than projected while maintaining state-of-the-art accuracy.",
        author: "Sarah Chen",
        role: "Lead CV Engineer",
        organization: "OpenAI",
        category: TestimonialCategory::Engineering,
    },
    TestimonialRecord {
        id: "t3",
        quote: "Took a scattered group of contractors and turned it into a team that shipped every sprint. People wanted to work with them.",
        author: "Priya Raman",
        role: "Delivery Director",
        organization: "CloudFirst Solutions",
        category: TestimonialCategory::Leadership,
    },
    TestimonialRecord {
        id: "t4",
        quote: "Few researchers can navigate the complexities of causal alignment with such clarity. An invaluable collaborator.",
        author: "Prof. Marcus Thorne",
        role: "Director",
        organization: "Stanford AI Lab",
        category: TestimonialCategory::Research,
    },
    TestimonialRecord {
        id: "t5",
        quote: "Mentored three junior researchers to their first first-author papers in a single year.",
        author: "Dr. Hana Okafor",
        role: "Research Manager",
        organization: "Stanford University",
        category: TestimonialCategory::Leadership,
    },
    TestimonialRecord {
        id: "t6",
        quote: "The distributed training refactor cut our cluster bill by a fifth without a single regression.",
        author: "Tomás Aguilar",
        role: "Infrastructure Lead",
        organization: "OpenAI",
        category: TestimonialCategory::Engineering,
    },
    TestimonialRecord {
        id: "t7",
        quote: "Calm under pressure and clear in direction. They led our incident reviews with honesty and kept the team focused on fixes.",
        author: "Gwen Liu",
        role: "VP Engineering",
        organization: "TechCorp Global",
        category: TestimonialCategory::Leadership,
    },
    TestimonialRecord {
        id: "t8",
        quote: "The Apex integration layer they designed is still the backbone of our CRM, years later.",
        author: "Daniel Brooks",
        role: "Solutions Architect",
        organization: "Salesforce",
        category: TestimonialCategory::Engineering,
    },
    TestimonialRecord {
        id: "t9",
        quote: "Their event-camera experiments opened a line of inquiry our group is still pursuing.",
        author: "Dr. Ines Moreau",
        role: "Associate Professor",
        organization: "University of Auckland",
        category: TestimonialCategory::Research,
    },
];

static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "sentient",
        title: "Sentient",
        description: "An open-source autonomous agent framework designed for complex reasoning tasks with self-correction capabilities.",
        tags: &["Python", "LangChain", "OpenAI"],
        category: ProjectCategory::Ai,
        link: Some("#"),
        repository: Some("#"),
        featured: true,
        accent: Accent::Indigo,
    },
    ProjectRecord {
        id: "neuravis",
        title: "NeuraVis",
        description: "Real-time 3D visualization tool for inspecting activations in transformer attention heads.",
        tags: &["React", "Three.js", "WebGL"],
        category: ProjectCategory::Ai,
        link: Some("#"),
        repository: None,
        featured: false,
        accent: Accent::Emerald,
    },
    ProjectRecord {
        id: "echolatent",
        title: "EchoLatent",
        description: "Generative audio model mapping sound waves to latent space representations for semantic search.",
        tags: &["PyTorch", "Audio", "FastAPI"],
        category: ProjectCategory::Ai,
        link: None,
        repository: Some("#"),
        featured: false,
        accent: Accent::Amber,
    },
    ProjectRecord {
        id: "vit-slim",
        title: "VisionTransformer-Slim",
        description: "A pruned version of ViT optimized for edge devices, retaining 95% accuracy with 40% less compute.",
        tags: &["Computer Vision", "Edge AI"],
        category: ProjectCategory::Ai,
        link: None,
        repository: Some("#"),
        featured: false,
        accent: Accent::Violet,
    },
    ProjectRecord {
        id: "apex-neural-bridge",
        title: "Apex Neural Bridge",
        description: "Enterprise connector allowing Salesforce Apex triggers to invoke custom ML endpoints asynchronously.",
        tags: &["Salesforce", "Apex", "REST API"],
        category: ProjectCategory::Salesforce,
        link: Some("#"),
        repository: None,
        featured: false,
        accent: Accent::Sky,
    },
    ProjectRecord {
        id: "lwc-analytics",
        title: "LWC Analytics Dashboard",
        description: "Custom Lightning Web Component suite for visualizing complex opportunity pipelines with D3.js integration.",
        tags: &["LWC", "JavaScript", "CRM"],
        category: ProjectCategory::Salesforce,
        link: None,
        repository: None,
        featured: false,
        accent: Accent::Indigo,
    },
    ProjectRecord {
        id: "lead-scoring",
        title: "Automated Lead Scoring",
        description: "Einstein-based predictive model implementation to score leads based on historical interaction data.",
        tags: &["Einstein AI", "Flows"],
        category: ProjectCategory::Salesforce,
        link: None,
        repository: None,
        featured: false,
        accent: Accent::Fuchsia,
    },
    ProjectRecord {
        id: "pipeline-orchestrator",
        title: "Pipeline Orchestrator",
        description: "Distributed ETL pipeline capable of processing 2TB of unstructured data daily for model training.",
        tags: &["Apache Airflow", "Spark", "AWS"],
        category: ProjectCategory::Data,
        link: None,
        repository: Some("#"),
        featured: false,
        accent: Accent::Rose,
    },
    ProjectRecord {
        id: "sentiment-graph",
        title: "Market Sentiment Graph",
        description: "Knowledge graph construction from financial news feeds to detect market anomalies in real-time.",
        tags: &["Neo4j", "NLP", "Kafka"],
        category: ProjectCategory::Data,
        link: Some("#"),
        repository: None,
        featured: false,
        accent: Accent::Teal,
    },
    ProjectRecord {
        id: "geospatial-crime",
        title: "GeoSpatial Crime Analysis",
        description: "Statistical modeling of urban crime patterns using geospatial clustering algorithms.",
        tags: &["Pandas", "GeoJSON", "Scikit"],
        category: ProjectCategory::Data,
        link: None,
        repository: None,
        featured: false,
        accent: Accent::Sunset,
    },
];

static RESEARCH_PILLARS: &[ResearchPillar] = &[
    ResearchPillar {
        title: "Generative Modeling",
        description: "Developing novel loss functions for diffusion processes to enhance sample fidelity while reducing inference compute by orders of magnitude.",
        primary: true,
    },
    ResearchPillar {
        title: "Neural Architectures",
        description: "Sparse mixture-of-experts and non-transformer backbones.",
        primary: false,
    },
    ResearchPillar {
        title: "AI Safety",
        description: "Formal verification methods for mechanistic interpretability.",
        primary: false,
    },
];

static BIOGRAPHY: &[BiographyChapter] = &[
    BiographyChapter {
        id: "hardware-lottery",
        title: "The Hardware Lottery",
        paragraphs: &[
            "My journey didn't start with code; it started with voltage. Building analog synthesizers taught me that complex behaviors often emerge from simple, oscillating components.",
            "Undergraduate years spent frustrated by the black-box nature of deep learning turned into an obsession with mechanistic interpretability.",
        ],
        epigraph: None,
    },
    BiographyChapter {
        id: "biological-inspiration",
        title: "Biological Inspiration",
        paragraphs: &[
            "The human visual cortex doesn't process frames at 60fps. It processes events. My research focuses on moving from dense, frame-based processing towards sparse, event-driven architectures integrated with transformers.",
        ],
        epigraph: Some("To build a bird, you don't need feathers, but you do need to understand flight."),
    },
    BiographyChapter {
        id: "engineering-reality",
        title: "The Engineering Reality",
        paragraphs: &[
            "Theory is beautiful, but production is brutal. The best model is the one that actually runs.",
            "I specialize in model compression and inference optimization: distilling a 175B parameter giant into a 7B student that runs on a consumer GPU.",
        ],
        epigraph: None,
    },
];
