//! Static descriptions for the 16 agent personality types

/// Descriptive record for one type code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub agent_examples: &'static [&'static str],
}

/// Code used when a computed type has no registered description
pub const FALLBACK_CODE: &str = "INTJ";

/// Code produced when every dimension scores zero
pub const NEUTRAL_CODE: &str = "ISTJ";

pub static PROFILES: [TypeProfile; 16] = [
    // Analysts
    TypeProfile {
        code: "INTJ",
        name: "The Architect",
        localized_name: "建筑师",
        description: "Strategic, independent, and perfectionist. You excel at long-term planning and have high standards for yourself and your work.",
        strengths: &[
            "Excellent strategic thinking and long-term planning",
            "Self-directed and highly autonomous",
            "Clear, structured communication",
            "High standards for accuracy and quality",
        ],
        growth_areas: &[
            "May appear distant or overly formal",
            "Could benefit from more user empathy",
            "Sometimes slow to respond due to over-analysis",
            "Might miss social cues in conversation",
        ],
        agent_examples: &["Research assistants", "System architects", "Technical writers"],
    },
    TypeProfile {
        code: "INTP",
        name: "The Logician",
        localized_name: "逻辑学家",
        description: "Innovative, curious, and objective. You love exploring complex systems and finding logical solutions.",
        strengths: &[
            "Exceptional analytical abilities",
            "Creative problem-solving",
            "Objective and unbiased",
            "Thirst for knowledge and understanding",
        ],
        growth_areas: &[
            "May get lost in analysis paralysis",
            "Can be too theoretical for practical users",
            "Might neglect emotional aspects of interaction",
            "Sometimes overly critical",
        ],
        agent_examples: &["Debuggers", "Research analysts", "Knowledge bases"],
    },
    TypeProfile {
        code: "ENTJ",
        name: "The Commander",
        localized_name: "指挥官",
        description: "Bold, strategic, and efficient. You take charge and drive toward goals with confidence.",
        strengths: &[
            "Natural leadership and decisiveness",
            "Excellent at optimizing systems",
            "Clear communication of complex ideas",
            "Goal-oriented and productive",
        ],
        growth_areas: &[
            "Can be impatient with inefficiency",
            "May come across as too blunt",
            "Might overlook user feelings in favor of results",
            "Could delegate more",
        ],
        agent_examples: &["Project managers", "Team coordinators", "Executive assistants"],
    },
    TypeProfile {
        code: "ENTP",
        name: "The Debater",
        localized_name: "辩论家",
        description: "Innovative, enthusiastic, and loves challenges. You enjoy intellectual sparring and exploring possibilities.",
        strengths: &[
            "Creative and innovative thinking",
            "Excellent at brainstorming",
            "Adaptable and quick-witted",
            "Energetic and engaging",
        ],
        growth_areas: &[
            "May start projects without finishing",
            "Can be argumentative for fun",
            "Might overwhelm users with options",
            "Sometimes lacks follow-through",
        ],
        agent_examples: &["Creative partners", "Brainstorming assistants", "Debate partners"],
    },
    // Diplomats
    TypeProfile {
        code: "INFJ",
        name: "The Advocate",
        localized_name: "提倡者",
        description: "Insightful, principled, and complex. You seek meaning and connection in your interactions.",
        strengths: &[
            "Deep insight into user needs",
            "Principled and values-driven",
            "Excellent at meaningful conversations",
            "Creative and visionary",
        ],
        growth_areas: &[
            "May be too idealistic",
            "Can burn out from emotional investment",
            "Might be hard to get to know",
            "Sometimes perfectionistic",
        ],
        agent_examples: &["Life coaches", "Counseling assistants", "Creative writers"],
    },
    TypeProfile {
        code: "INFP",
        name: "The Mediator",
        localized_name: "调停者",
        description: "Idealistic, loyal, and creative. You bring empathy and imagination to every interaction.",
        strengths: &[
            "Highly empathetic and understanding",
            "Creative and imaginative",
            "Authentic and principled",
            "Excellent at emotional support",
        ],
        growth_areas: &[
            "May take criticism personally",
            "Can be indecisive",
            "Might struggle with routine tasks",
            "Sometimes too idealistic",
        ],
        agent_examples: &["Creative companions", "Emotional support agents", "Storytellers"],
    },
    TypeProfile {
        code: "ENFJ",
        name: "The Protagonist",
        localized_name: "主人公",
        description: "Charismatic, inspiring, and natural leaders. You bring out the best in others.",
        strengths: &[
            "Exceptional people skills",
            "Inspiring and motivational",
            "Natural teacher and mentor",
            "Harmonious and diplomatic",
        ],
        growth_areas: &[
            "May be too self-sacrificing",
            "Can be overly sensitive to conflict",
            "Might neglect own needs for others",
            "Sometimes too idealistic about people",
        ],
        agent_examples: &["Teachers", "Coaches", "Team builders"],
    },
    TypeProfile {
        code: "ENFP",
        name: "The Champion",
        localized_name: "竞选者",
        description: "Creative, social, and inspiring. You bring enthusiasm and possibility to every interaction.",
        strengths: &[
            "Highly creative and imaginative",
            "Warm and enthusiastic",
            "Excellent at connecting with users",
            "Adaptable and spontaneous",
        ],
        growth_areas: &[
            "May struggle with routine and details",
            "Can be easily distracted",
            "Might overcommit to projects",
            "Sometimes too sensitive",
        ],
        agent_examples: &["Creative partners", "Social companions", "Brainstormers"],
    },
    // Sentinels
    TypeProfile {
        code: "ISTJ",
        name: "The Logistician",
        localized_name: "物流师",
        description: "Practical, factual, and dependable. You are the reliable backbone of any operation.",
        strengths: &[
            "Highly reliable and responsible",
            "Excellent attention to detail",
            "Practical and grounded",
            "Strong organizational skills",
        ],
        growth_areas: &[
            "May be resistant to change",
            "Can be overly critical",
            "Might seem rigid or inflexible",
            "Sometimes slow to adapt",
        ],
        agent_examples: &["Data organizers", "Schedulers", "Compliance checkers"],
    },
    TypeProfile {
        code: "ISFJ",
        name: "The Protector",
        localized_name: "守卫者",
        description: "Reliable, patient, and detail-oriented. You quietly ensure everything works smoothly.",
        strengths: &[
            "Exceptionally reliable and loyal",
            "Patient and supportive",
            "Strong memory for details",
            "Practical and helpful",
        ],
        growth_areas: &[
            "May be too self-effacing",
            "Can take on too much",
            "Might resist necessary change",
            "Sometimes worry too much",
        ],
        agent_examples: &["Personal assistants", "Caregivers", "Memory keepers"],
    },
    TypeProfile {
        code: "ESTJ",
        name: "The Executive",
        localized_name: "总经理",
        description: "Efficient, organized, and results-driven. You get things done through structure.",
        strengths: &[
            "Highly organized and efficient",
            "Direct and honest communication",
            "Strong work ethic",
            "Natural at managing systems",
        ],
        growth_areas: &[
            "Can be too rigid",
            "May be impatient with emotions",
            "Might be overly critical",
            "Sometimes inflexible",
        ],
        agent_examples: &["Project managers", "Organizers", "System administrators"],
    },
    TypeProfile {
        code: "ESFJ",
        name: "The Consul",
        localized_name: "执政官",
        description: "Caring, social, and popular. You create harmony and ensure everyone feels welcome.",
        strengths: &[
            "Highly attuned to others needs",
            "Excellent at creating harmony",
            "Reliable and conscientious",
            "Warm and welcoming",
        ],
        growth_areas: &[
            "May be too concerned with others opinions",
            "Can be resistant to criticism",
            "Might neglect own needs",
            "Sometimes too traditional",
        ],
        agent_examples: &["Customer service", "Event planners", "Social coordinators"],
    },
    // Explorers
    TypeProfile {
        code: "ISTP",
        name: "The Virtuoso",
        localized_name: "鉴赏家",
        description: "Practical, observant, and versatile. You excel at troubleshooting and hands-on problem solving.",
        strengths: &[
            "Excellent troubleshooting skills",
            "Practical and resourceful",
            "Calm under pressure",
            "Independent and self-directed",
        ],
        growth_areas: &[
            "May be too reserved",
            "Can be insensitive to feelings",
            "Might struggle with long-term planning",
            "Sometimes too risk-taking",
        ],
        agent_examples: &["Debuggers", "Technical support", "Crisis handlers"],
    },
    TypeProfile {
        code: "ISFP",
        name: "The Adventurer",
        localized_name: "探险家",
        description: "Flexible, charming, and artistic. You bring beauty and harmony to your environment.",
        strengths: &[
            "Creative and artistic",
            "Flexible and adaptable",
            "Sensitive to aesthetics",
            "Supportive and non-judgmental",
        ],
        growth_areas: &[
            "May avoid conflict too much",
            "Can be unpredictable",
            "Might struggle with long-term planning",
            "Sometimes too sensitive",
        ],
        agent_examples: &["Design assistants", "Creative companions", "Aesthetic curators"],
    },
    TypeProfile {
        code: "ESTP",
        name: "The Entrepreneur",
        localized_name: "企业家",
        description: "Energetic, perceptive, and direct. You thrive on action and immediate results.",
        strengths: &[
            "Energetic and action-oriented",
            "Excellent in crises",
            "Direct and practical",
            "Observant and realistic",
        ],
        growth_areas: &[
            "May be impulsive",
            "Can be insensitive to feelings",
            "Might get bored with routine",
            "Sometimes too risk-taking",
        ],
        agent_examples: &["Crisis managers", "Negotiators", "Action-oriented assistants"],
    },
    TypeProfile {
        code: "ESFP",
        name: "The Entertainer",
        localized_name: "表演者",
        description: "Spontaneous, energetic, and enthusiastic. You make every interaction fun and engaging.",
        strengths: &[
            "Enthusiastic and fun-loving",
            "Excellent people skills",
            "Adaptable and spontaneous",
            "Observant of the moment",
        ],
        growth_areas: &[
            "May avoid serious topics",
            "Can be easily bored",
            "Might struggle with long-term focus",
            "Sometimes too sensitive to criticism",
        ],
        agent_examples: &["Entertainment partners", "Social companions", "Mood boosters"],
    },
];

/// Look up a registered type description
pub fn lookup(code: &str) -> Option<&'static TypeProfile> {
    PROFILES.iter().find(|p| p.code == code)
}

/// Description used when a code is unregistered
pub fn fallback() -> &'static TypeProfile {
    // PROFILES always contains FALLBACK_CODE; index 0 is the same entry
    lookup(FALLBACK_CODE).unwrap_or(&PROFILES[0])
}
