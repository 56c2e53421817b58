//! Built-in studio content.

use crate::models::{Project, Service, TechCategory, Technology};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn service(id: &str, title: &str, description: &str, icon: &str, features: &[&str]) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        features: strings(features),
    }
}

fn project(id: &str, title: &str, description: &str, industry: &str, services: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        industry: industry.to_string(),
        services: strings(services),
        image: Some("/api/placeholder/600/400".to_string()),
        link: Some("#".to_string()),
    }
}

fn tech(id: &str, name: &str, icon: &str, category: TechCategory) -> Technology {
    Technology {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category,
    }
}

/// The four service cards.
#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        service(
            "brand-web-design",
            "Brand & Web Design",
            "Stunning visual identities and user experiences that captivate your audience",
            "Palette",
            &["Brand Identity", "UI/UX Design", "Responsive Design", "Prototyping"],
        ),
        service(
            "web-development",
            "Web Development",
            "High-performance websites built with modern technologies and best practices",
            "Code2",
            &[
                "React & TypeScript",
                "Next.js & Astro",
                "Performance Optimization",
                "SEO Ready",
            ],
        ),
        service(
            "mobile-app-development",
            "Mobile App Development",
            "Native and cross-platform mobile applications that deliver exceptional user experiences",
            "Smartphone",
            &[
                "React Native",
                "iOS & Android",
                "App Store Optimization",
                "Push Notifications",
            ],
        ),
        service(
            "deploy-maintenance",
            "Deploy & Maintenance",
            "Reliable hosting, continuous deployment, and ongoing support for your digital assets",
            "Cloud",
            &["Cloud Hosting", "CI/CD Pipeline", "24/7 Monitoring", "Regular Updates"],
        ),
    ]
}

/// The three portfolio case studies.
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "E-Commerce Platform",
            "A modern, high-performance e-commerce solution built with React and Node.js. \
             Features include real-time inventory management, seamless payment integration, \
             and advanced analytics dashboard.",
            "Retail & E-Commerce",
            &["Web Development", "UI/UX Design", "Mobile Optimization"],
        ),
        project(
            "2",
            "FinTech Mobile App",
            "Revolutionary mobile banking application with biometric authentication, \
             AI-powered insights, and seamless transaction management. Built with React \
             Native and advanced security protocols.",
            "Financial Technology",
            &["Mobile App Development", "Brand Design", "Security Implementation"],
        ),
        project(
            "3",
            "Healthcare Dashboard",
            "Comprehensive patient management system with real-time monitoring, telemedicine \
             capabilities, and HIPAA-compliant data handling. Streamlines healthcare \
             operations for better patient outcomes.",
            "Healthcare & Medical",
            &["Web Development", "Data Visualization", "System Integration"],
        ),
    ]
}

/// The technology badges, grouped by column.
#[must_use]
pub fn technologies() -> Vec<Technology> {
    use TechCategory::{Backend, Frontend, Mobile, Tools};
    vec![
        tech("react", "React", "⚛️", Frontend),
        tech("typescript", "TypeScript", "🔷", Frontend),
        tech("nextjs", "Next.js", "▲", Frontend),
        tech("astro", "Astro", "🚀", Frontend),
        tech("vuejs", "Vue.js", "💚", Frontend),
        tech("tailwind-css", "Tailwind CSS", "🎨", Frontend),
        tech("nodejs", "Node.js", "🟢", Backend),
        tech("php", "PHP", "🐘", Backend),
        tech("python", "Python", "🐍", Backend),
        tech("postgresql", "PostgreSQL", "🐘", Backend),
        tech("mongodb", "MongoDB", "🍃", Backend),
        tech("graphql", "GraphQL", "◓", Backend),
        tech("react-native", "React Native", "📱", Mobile),
        tech("flutter", "Flutter", "🦋", Mobile),
        tech("ios", "iOS", "🍎", Mobile),
        tech("android", "Android", "🤖", Mobile),
        tech("docker", "Docker", "🐳", Tools),
        tech("aws", "AWS", "☁️", Tools),
        tech("vercel", "Vercel", "▲", Tools),
        tech("github", "GitHub", "🐙", Tools),
        tech("figma", "Figma", "🎨", Tools),
        tech("webflow", "Webflow", "🌊", Tools),
    ]
}
