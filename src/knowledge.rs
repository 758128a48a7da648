//! Canned answers about the portfolio owner.
//!
//! Topics are evaluated in [`TOPICS`] order and the first one whose keywords
//! appear in the question wins, so the order decides ambiguous questions.

use crate::response::{NormalizedResponse, ResponseKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Experience,
    Projects,
    Java,
    Banking,
    Contact,
    About,
    CodeSample,
    Education,
}

pub const TOPICS: [Topic; 9] = [
    Topic::Skills,
    Topic::Experience,
    Topic::Projects,
    Topic::Java,
    Topic::Banking,
    Topic::Contact,
    Topic::About,
    Topic::CodeSample,
    Topic::Education,
];

pub const FALLBACK_SUGGESTIONS: &[&str] = &[
    "What are your Java skills?",
    "Tell me about your banking projects",
    "What is your experience with Spring Boot?",
    "How can I contact you?",
];

impl Topic {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Skills => &["skill", "technology", "tech stack"],
            Self::Experience => &["experience", "work", "job"],
            Self::Projects => &["project", "portfolio", "work on"],
            Self::Java => &["java", "spring", "quarkus"],
            Self::Banking => &["bank", "credit", "financial"],
            Self::Contact => &["contact", "email", "phone", "hire"],
            Self::About => &["about", "who are you", "introduce"],
            Self::CodeSample => &["code example", "show me code"],
            Self::Education => &["education", "degree", "university"],
        }
    }

    /// `lower` must already be lower-cased.
    fn matches(self, lower: &str) -> bool {
        self.keywords().iter().any(|keyword| lower.contains(keyword))
    }

    pub fn for_question(question: &str) -> Option<Self> {
        let lower = question.to_lowercase();
        TOPICS.into_iter().find(|topic| topic.matches(&lower))
    }

    pub fn response(self) -> NormalizedResponse {
        match self {
            Self::Skills => NormalizedResponse::local(
                SKILLS_ANSWER,
                ResponseKind::List,
                &["Technical Skills section"],
                &[
                    "What projects have you worked on?",
                    "Tell me about your banking experience",
                    "How can I contact you?",
                ],
            ),
            Self::Experience => NormalizedResponse::local(
                EXPERIENCE_ANSWER,
                ResponseKind::List,
                &["Professional Experience section"],
                &[
                    "What banking projects have you done?",
                    "Tell me about your Java experience",
                    "Show me your projects",
                ],
            ),
            Self::Projects => NormalizedResponse::local(
                PROJECTS_ANSWER,
                ResponseKind::List,
                &["Projects section"],
                &[
                    "What technologies did you use?",
                    "Tell me about your banking experience",
                    "What is your Java expertise?",
                ],
            ),
            Self::Java => NormalizedResponse::local(
                JAVA_ANSWER,
                ResponseKind::List,
                &["Technical Skills", "Professional Experience", "Projects"],
                &[
                    "What banking projects used Java?",
                    "Tell me about your Spring Boot experience",
                    "What is Quarkus?",
                ],
            ),
            Self::Banking => NormalizedResponse::local(
                BANKING_ANSWER,
                ResponseKind::List,
                &["Professional Experience at TeReSol", "Projects section"],
                &[
                    "What technologies did you use in banking?",
                    "Tell me about your Java experience",
                    "What other projects have you done?",
                ],
            ),
            Self::Contact => NormalizedResponse::local(
                CONTACT_ANSWER,
                ResponseKind::List,
                &["Personal Information"],
                &[
                    "What are your technical skills?",
                    "Tell me about your experience",
                    "What projects have you worked on?",
                ],
            ),
            Self::About => NormalizedResponse::local(
                ABOUT_ANSWER,
                ResponseKind::Text,
                &["Professional Profile"],
                &[
                    "What are your technical skills?",
                    "Tell me about your projects",
                    "How can I contact you?",
                ],
            ),
            Self::CodeSample => NormalizedResponse::local(
                CODE_SAMPLE_ANSWER,
                ResponseKind::Code,
                &["Java/Spring Experience"],
                &[
                    "Tell me more about your banking projects",
                    "What other frameworks do you know?",
                ],
            ),
            Self::Education => NormalizedResponse::local(
                EDUCATION_ANSWER,
                ResponseKind::List,
                &["Education section"],
                &[
                    "What are your technical skills?",
                    "Tell me about your experience",
                    "What projects have you done?",
                ],
            ),
        }
    }
}

/// Answers a portfolio question from the canned topics, falling back to a
/// menu of what can be asked.
pub fn compose_local(question: &str) -> NormalizedResponse {
    match Topic::for_question(question) {
        Some(topic) => topic.response(),
        None => fallback_response(question),
    }
}

fn fallback_response(question: &str) -> NormalizedResponse {
    let answer = format!(
        "I understand you're asking about \"{question}\". As a Backend Developer with expertise in \
         Java, Spring Boot, Quarkus, and banking systems, I can provide detailed information about:\n\n\
         • My technical skills and backend technologies\n\
         • Professional experience at TeReSol and TechnoGate\n\
         • Banking projects (Core Banking, CMS)\n\
         • Java/Spring Boot/Quarkus development\n\
         • API development and database design\n\
         • Education and learning projects\n\
         • Contact information and availability\n\n\
         Could you specify what you'd like to know about my backend development experience?"
    );
    NormalizedResponse::local(
        answer,
        ResponseKind::Text,
        &["General Portfolio Information"],
        FALLBACK_SUGGESTIONS,
    )
}

const SKILLS_ANSWER: &str = "As a Backend Developer with 1+ years of experience, here's my technical expertise:\n\n\
**Core Backend Technologies:**\n\
• Java (Primary Language) - Spring Boot, Quarkus\n\
• Node.js for backend services\n\
• RESTful API Development\n\
• Microservices Architecture\n\n\
**Databases & ORM:**\n\
• MySQL, PostgreSQL\n\
• Hibernate ORM\n\
• Database Design & Optimization\n\n\
**Frontend & State Management:**\n\
• Angular for frontend development\n\
• XSTATE for state management\n\
• HTML/CSS, JavaScript\n\n\
**Development Tools:**\n\
• Git, VS Code, IntelliJ IDEA, Eclipse\n\
• Postman/Thunder Client for API Testing\n\
• Taiga for project management\n\n\
**Domain Expertise:**\n\
• Core Banking Systems\n\
• Credit Management Systems\n\
• Consumer Management Systems\n\
• Video Streaming Applications";

const EXPERIENCE_ANSWER: &str = "I have 1+ years of professional backend development experience:\n\n\
**Software Design Engineer at TeReSol** (Jan 2025 - Present)\n\
• Developing Credit Management and banking modules for Bank Al Habib\n\
• Working with JavaScript, XState, and Java\n\
• Implementing state management and business workflows\n\
• Building Consumer Management System using Java and Quarkus\n\
• Core team member focusing on service architecture\n\n\
**Junior Java Intern at TechnoGate** (Aug - Oct 2023)\n\
• Spring Boot backend development\n\
• RESTful API design and implementation\n\
• Test reporting system development\n\n\
My experience spans banking systems, enterprise applications, and full-stack development with \
strong focus on backend architecture.";

const PROJECTS_ANSWER: &str = "Here are my key backend development projects:\n\n\
**🏦 Core Banking - Bank Al Habib**\n\
• Credit Management and banking modules\n\
• Technologies: Java, Quarkus, JavaScript, XSTATE\n\
• State management and backend service integration\n\
• Banking standards compliance and performance optimization\n\n\
**💳 Consumer Management System (CMS)**\n\
• Core backend services using Java and Quarkus\n\
• Microservices architecture for Bank Al Habib\n\
• Database design and system reliability\n\
• Technical documentation and core development\n\n\
**🎓 Learning Platform (Final Year Project)**\n\
• Full-stack learning platform with exam portal\n\
• Backend: Spring Boot, Hibernate, RESTful APIs\n\
• Frontend: Angular\n\
• API testing with Postman\n\n\
**🎬 Video Streaming Application**\n\
• Backend for video streaming and downloading\n\
• Video processing capabilities\n\
• Real-time data handling systems\n\n\
These projects demonstrate my expertise in building scalable backend systems for various domains.";

const JAVA_ANSWER: &str = "**Java Backend Development Expertise:**\n\n\
I specialize in Java-based backend development with extensive experience in:\n\n\
**Spring Boot:**\n\
• RESTful API development\n\
• Microservices architecture\n\
• Hibernate ORM integration\n\
• Application performance optimization\n\
• In-house internship experience at TechnoGate\n\n\
**Quarkus:**\n\
• Currently working with Quarkus at TeReSol\n\
• Building Consumer Management System for banking\n\
• Supersonic Subatomic Java for cloud-native applications\n\
• Core backend services development\n\n\
**Enterprise Java:**\n\
• Banking system development (Bank Al Habib)\n\
• Credit management modules\n\
• Secure data handling and compliance\n\
• System architecture and design\n\n\
I have hands-on experience building production-grade backend systems using both Spring Boot and \
Quarkus frameworks.";

const BANKING_ANSWER: &str = "**Banking Domain Expertise:**\n\n\
I have substantial experience in banking and financial systems development:\n\n\
**Core Banking Development at TeReSol:**\n\
• Credit Management System for Bank Al Habib\n\
• Banking modules development using Java and JavaScript\n\
• State management with XSTATE\n\
• Business workflow implementation\n\
• Secure data handling and compliance\n\n\
**Consumer Management System:**\n\
• Core backend services for banking operations\n\
• Microservices architecture with Quarkus\n\
• Database design and system reliability\n\
• Enterprise-level application development\n\n\
**Key Responsibilities:**\n\
• Backend service integration\n\
• Performance tuning and optimization\n\
• Collaboration with cross-functional teams\n\
• Compliance with banking industry standards\n\n\
My banking projects demonstrate my ability to work on critical financial systems with high \
reliability requirements.";

const CONTACT_ANSWER: &str = "**Contact Information:**\n\n\
📧 **Email:** ehsanulkhaliq274@gmail.com\n\
📞 **Phone:** +92348 7350330\n\
💼 **LinkedIn:** linkedin.com/in/ehsanulkhaliq\n\
🐙 **GitHub:** github.com/Ehsanulkhaliq4\n\
📍 **Location:** Renala khurd, Okara, Punjab, Pakistan\n\n\
I'm currently working as a Software Design Engineer at TeReSol and open to new opportunities in \
backend development, particularly in Java, Spring Boot, Quarkus, and banking systems.\n\n\
Feel free to reach out for:\n\
• Backend development positions\n\
• Java/Spring Boot/Quarkus projects\n\
• Banking/financial system development\n\
• API development and integration\n\
• Full-stack development roles";

const ABOUT_ANSWER: &str = "I'm **Ehsan Ul Khaliq**, a Backend Developer with 1+ years of professional \
experience specializing in Java, Spring Boot, and Quarkus development.\n\n\
**My Expertise:**\n\
• Backend Development with Java ecosystems\n\
• Banking and Financial Systems\n\
• RESTful API and Microservices Architecture\n\
• Database Design with MySQL/PostgreSQL\n\
• Full-stack development with Angular\n\n\
**Current Role:** Software Design Engineer at TeReSol, working on core banking systems for Bank \
Al Habib, focusing on credit management and consumer management systems.\n\n\
I'm passionate about building scalable, reliable backend systems and have experience across \
banking, education, and media streaming domains. I enjoy solving complex problems and continuously \
learning new technologies to enhance my backend development skills.";

const CODE_SAMPLE_ANSWER: &str = "Here's a simple Spring Boot REST endpoint I've worked with:\n\n\
```java\n\
@RestController\n\
public class CreditController {\n    \
@GetMapping(\"/credit/{id}\")\n    \
public ResponseEntity<Credit> getCredit(@PathVariable Long id) {\n        \
// Business logic here\n    \
}\n\
}\n\
```";

const EDUCATION_ANSWER: &str = "**Educational Background:**\n\n\
**University Of Okara** (October 2020 – July 2024)\n\
• Bachelor of Science in Computer Science\n\
• Relevant Coursework: Data Structures, Algorithms Analysis, Databases, Operating Systems, \
Computer Networking, Information Security, Artificial Intelligence\n\n\
**Superior Group Of Colleges** (Aug 2018 – Sep 2020)\n\
• Fsc (Pre-Engineering)\n\n\
My computer science education provided me with strong fundamentals in algorithms, data \
structures, and system design, which I apply daily in my backend development work.";
