use crate::model::styles::VarkStyle;

#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    pub text: &'static str,
    pub style: VarkStyle,
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [OptionDef],
}

#[derive(Debug, Clone, Copy)]
pub struct DomainDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub questions: &'static [QuestionDef],
}

const fn opt(text: &'static str, style: VarkStyle) -> OptionDef {
    OptionDef { text, style }
}

use VarkStyle::{Auditory as A, Kinesthetic as K, ReadingWriting as R, Visual as V};

const INFORMATION_PROCESSING: &[QuestionDef] = &[
    QuestionDef {
        id: "ip_1",
        text: "When you meet a new concept in class, what helps you understand it first?",
        options: &[
            opt("A diagram, chart or picture of the idea", V),
            opt("Hearing the teacher explain it", A),
            opt("Reading a clear written definition", R),
            opt("Trying an example or activity myself", K),
        ],
    },
    QuestionDef {
        id: "ip_2",
        text: "You need to follow directions to a place you have never been. You prefer:",
        options: &[
            opt("Looking at a map", V),
            opt("Having someone tell you the way", A),
            opt("Written step-by-step directions", R),
            opt("Just starting out and finding it as you go", K),
        ],
    },
    QuestionDef {
        id: "ip_3",
        text: "When solving a difficult problem, you usually:",
        options: &[
            opt("Sketch it out or picture it", V),
            opt("Talk it through with someone", A),
            opt("Write down the facts and steps", R),
            opt("Experiment until something works", K),
        ],
    },
];

const MEMORY_RETENTION: &[QuestionDef] = &[
    QuestionDef {
        id: "mr_1",
        text: "What do you remember most easily after a lesson?",
        options: &[
            opt("The slides, images and videos", V),
            opt("What people said during the discussion", A),
            opt("The notes and handouts", R),
            opt("The activity or experiment we did", K),
        ],
    },
    QuestionDef {
        id: "mr_2",
        text: "To revise for a test you would rather:",
        options: &[
            opt("Make colour-coded mind maps", V),
            opt("Recite key points out loud or record them", A),
            opt("Rewrite and summarise your notes", R),
            opt("Practise with past questions and models", K),
        ],
    },
    QuestionDef {
        id: "mr_3",
        text: "Remembering a phone number, you tend to:",
        options: &[
            opt("Picture the digits", V),
            opt("Say it to yourself", A),
            opt("Write it down", R),
            opt("Dial it with your fingers in the air", K),
        ],
    },
];

const COMMUNICATION: &[QuestionDef] = &[
    QuestionDef {
        id: "cm_1",
        text: "When explaining something to a classmate, you:",
        options: &[
            opt("Draw a quick sketch", V),
            opt("Explain it verbally", A),
            opt("Send them a written summary", R),
            opt("Show them how to do it", K),
        ],
    },
    QuestionDef {
        id: "cm_2",
        text: "Which kind of feedback from a teacher helps you most?",
        options: &[
            opt("Marked-up examples and graphs of progress", V),
            opt("A conversation about your work", A),
            opt("Written comments on the assignment", R),
            opt("A demonstration of how to improve", K),
        ],
    },
];

const PRACTICAL_APPLICATION: &[QuestionDef] = &[
    QuestionDef {
        id: "pa_1",
        text: "You want to learn to use a new app. You:",
        options: &[
            opt("Watch a video walkthrough", V),
            opt("Ask a friend to talk you through it", A),
            opt("Read the help pages", R),
            opt("Click around and try things", K),
        ],
    },
    QuestionDef {
        id: "pa_2",
        text: "Which project would you choose?",
        options: &[
            opt("Designing a poster or infographic", V),
            opt("Recording a podcast episode", A),
            opt("Writing a research report", R),
            opt("Building a model or prototype", K),
        ],
    },
];

const BUILTIN_DOMAINS: &[DomainDef] = &[
    DomainDef {
        id: "information_processing",
        name: "Information Processing",
        description: "How you take in and make sense of new information.",
        weight: 1.5,
        questions: INFORMATION_PROCESSING,
    },
    DomainDef {
        id: "memory_retention",
        name: "Memory & Retention",
        description: "How you store and recall what you have learned.",
        weight: 1.25,
        questions: MEMORY_RETENTION,
    },
    DomainDef {
        id: "communication",
        name: "Communication",
        description: "How you prefer to share and receive ideas.",
        weight: 1.0,
        questions: COMMUNICATION,
    },
    DomainDef {
        id: "practical_application",
        name: "Practical Application",
        description: "How you apply skills in real situations.",
        weight: 1.0,
        questions: PRACTICAL_APPLICATION,
    },
];

pub fn builtin_domains() -> &'static [DomainDef] {
    BUILTIN_DOMAINS
}
