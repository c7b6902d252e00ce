//! Static profile content rendered by the page sections.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_TITLE: &str = "Mi Portafolio";
pub const OWNER_NAME: &str = "Jose Vides Baron";
pub const OWNER_SHORT_NAME: &str = "Jose Vides";
pub const ROLE: &str = "Desarrollador de Software";
pub const TAGLINE: &str = "Apasionado por crear experiencias web increíbles y soluciones innovadoras.";
/// Served from `public/`. Replace the placeholder with a real photo at deploy time.
pub const PROFILE_IMAGE: &str = "/perfil.svg";
pub const PROFILE_IMAGE_SIZE_PX: u32 = 256;

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Soy un desarrollador de software con un enfoque principal en el desarrollo backend, especializándome en la \
     creación de APIs robustas, arquitecturas de bases de datos eficientes y sistemas escalables. Mi experiencia en \
     tecnologías como Laravel, Java y PHP me permite diseñar soluciones backend que son tanto potentes como \
     mantenibles.",
    "Aunque mi fortaleza está en el backend, también tengo experiencia en desarrollo frontend, lo que me permite \
     crear aplicaciones web completas y entender el flujo de datos desde la base de datos hasta la interfaz de \
     usuario. Esta visión integral me permite colaborar efectivamente con equipos multidisciplinarios y aportar \
     soluciones que consideran tanto la experiencia del usuario como la eficiencia del servidor.",
    "Mi objetivo es crear soluciones que no solo sean funcionales y escalables, sino también seguras y optimizadas \
     para el rendimiento, priorizando siempre las mejores prácticas de desarrollo y los patrones de diseño \
     establecidos.",
];

/// A skill and its self-assessed level in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Inline style for the progress bar fill.
    pub fn bar_style(self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

pub const SKILLS: [Skill; 12] = [
    Skill { name: "HTML/CSS", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "Angular", level: 80 },
    Skill { name: "Laravel", level: 75 },
    Skill { name: "Java", level: 70 },
    Skill { name: "PHP", level: 75 },
    Skill { name: "React", level: 65 },
    Skill { name: "Node.js", level: 60 },
    Skill { name: "TypeScript", level: 55 },
    Skill { name: "Next.js", level: 60 },
    Skill { name: "SQL", level: 65 },
    Skill { name: "Git", level: 80 },
];

/// Gallery card. Links are placeholders until real projects are published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub summary: &'static str,
    pub demo_href: &'static str,
    pub code_href: &'static str,
}

pub const PROJECT_COUNT: usize = 3;

pub fn projects() -> Vec<Project> {
    (1..=PROJECT_COUNT)
        .map(|n| Project {
            title: format!("Nombre del Proyecto {n}"),
            summary: "Descripción breve del proyecto y las tecnologías utilizadas.",
            demo_href: "#",
            code_href: "#",
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Twitter,
}

impl SocialIcon {
    /// SVG path data for the 24x24 icon.
    pub fn path(self) -> &'static str {
        match self {
            Self::GitHub => {
                "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"
            }
            Self::LinkedIn => {
                "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"
            }
            Self::Twitter => {
                "M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com/JoseVides17", icon: SocialIcon::GitHub },
    SocialLink { label: "LinkedIn", href: "https://www.linkedin.com/in/josevides17", icon: SocialIcon::LinkedIn },
    SocialLink { label: "Twitter", href: "https://x.com/videsbaron", icon: SocialIcon::Twitter },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {OWNER_SHORT_NAME}. Todos los derechos reservados.")
}
