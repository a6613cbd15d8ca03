#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub socials: &'static [SocialLink],
    pub skills: &'static [&'static str],
    pub works: &'static [Work],
}

pub const PROFILE: Profile = Profile {
    name: "Emmanuel Adenugba",
    title: "RWA Researcher | Community Builder",
    image: "/images/pfp.jpg",
    socials: &[
        SocialLink {
            label: "Gmail",
            url: "mailto:nxulltechnoogies@gmail.com",
        },
        SocialLink {
            label: "Medium",
            url: "https://medium.com/@_Nxull",
        },
        SocialLink {
            label: "Telegram",
            url: "https://t.me/N_Nxull",
        },
        SocialLink {
            label: "Twitter",
            url: "https://x.com/_Nxull",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/emmanuel-adenugba",
        },
    ],
    skills: &[
        "Web3 Research",
        "Community Building",
        "DeFi Analysis",
        "Content Writing",
        "Automation",
        "Portfolio Design",
    ],
    works: &[
        Work {
            title: "Svim Finance",
            description: "Boosted X engagement by 15% in 2 months and managed Telegram community.",
            link: "#",
        },
        Work {
            title: "Centrifuge RWA Research",
            description: "Researched and published insights on real-world assets in DeFi.",
            link: "#",
        },
    ],
};
