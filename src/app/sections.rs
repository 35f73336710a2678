use leptos::prelude::*;

use super::content::{
    Milestone, CERTIFICATIONS, EDUCATION, EXPERIENCE, PROJECTS, RESUME_PATH, SERVICES, SKILLS,
    STATS,
};
use super::host::{use_counter, use_reveal};
use crate::view_state::RevealRule;

/// Section headings fade in once 150px inside the viewport.
const HEADING_MARGIN: f64 = 150.0;
const STAT_DURATION_MS: u64 = 1500;

/// Fades and slides its children in the first time they come into view.
#[component]
pub fn Reveal(
    #[prop(into)] name: String,
    #[prop(optional)] rule: RevealRule,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (node, revealed) = use_reveal(name, rule);
    let class = move || {
        let motion = if revealed.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!("transition-all duration-700 ease-out {motion} {class}")
    };
    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 lg:mb-16">
            <h2 class="text-4xl lg:text-5xl font-extrabold mb-4 text-slate-100">{title}</h2>
            <p class="text-gray-400 text-lg max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 lg:py-32 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="about" rule=RevealRule::margin(HEADING_MARGIN)>
                    <SectionHeading
                        title="About Me"
                        subtitle="My background, my passion, and my commitment to creating exceptional digital experiences."
                    />
                    <div class="bg-slate-800/60 max-w-4xl mx-auto rounded-2xl p-8 lg:p-12 border border-slate-700/50">
                        <div class="space-y-6 text-gray-300 text-lg leading-relaxed">
                            <p>
                                "Hello! I'm " <strong class="text-white">"Mohammed Samiq Khan"</strong>
                                ", a passionate web developer and Computer Science student specializing in "
                                <strong class="text-purple-400">
                                    "Artificial Intelligence and Machine Learning"
                                </strong>
                                ". With a keen eye for design and a love for clean code, I create digital experiences that leave a lasting impression."
                            </p>
                            <p>
                                "Currently pursuing my engineering degree, I combine academic knowledge with practical experience from freelancing, where I develop websites, manage social media, create logos, and provide digital solutions for clients across various industries."
                            </p>
                            <p>
                                "Driven by innovation and a problem-solving mindset, I thrive on turning complex challenges into user-friendly solutions that empower businesses and enhance user engagement."
                            </p>
                        </div>
                        <div class="mt-10 text-center">
                            <a
                                href=RESUME_PATH
                                download=""
                                class="inline-flex items-center gap-3 px-8 py-3 font-semibold bg-purple-600 rounded-lg shadow-lg hover:bg-purple-700 transition-all"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 lg:py-32 relative bg-slate-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="skills" rule=RevealRule::amount(0.2)>
                    <SectionHeading
                        title="My Skills"
                        subtitle="The languages, design tools and technologies I work with."
                    />
                </Reveal>
                <div class="max-w-3xl mx-auto space-y-8">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal
                                    name=format!("skills-{i}")
                                    rule=RevealRule::amount(0.5)
                                    class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50"
                                >
                                    <h3 class="text-xl font-bold mb-4">{category.title}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 text-sm rounded-full bg-purple-500/20 text-purple-300">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 lg:py-32 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="projects" rule=RevealRule::margin(100.0)>
                    <SectionHeading
                        title="Featured Projects"
                        subtitle="A selection of things I have designed and built."
                    />
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    name=format!("project-{i}")
                                    rule=RevealRule::margin(100.0)
                                    class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50 flex flex-col"
                                >
                                    <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                    <p class="text-gray-400 mb-4 flex-1">{project.description}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-2 py-1 text-xs rounded bg-slate-700 text-gray-300">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex gap-4 text-sm">
                                        {project
                                            .live_url
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="text-purple-400 hover:text-purple-300"
                                                    >
                                                        "Live Demo"
                                                    </a>
                                                }
                                            })}
                                        {project
                                            .github_url
                                            .map(|href| {
                                                view! {
                                                    <a
                                                        href=href
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="text-gray-400 hover:text-white"
                                                    >
                                                        "Source"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(prefix: &'static str, items: &'static [Milestone]) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto relative border-l-2 border-purple-500/40 pl-8 space-y-10">
            {items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    view! {
                        <Reveal name=format!("{prefix}-{i}") rule=RevealRule::amount(0.2)>
                            <div class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50">
                                <span class="text-sm text-gray-400">{item.period}</span>
                                <h3 class="text-xl font-bold mt-1">{item.title}</h3>
                                <p class="text-purple-400 font-medium mb-3">{item.place}</p>
                                <p class="text-gray-300">{item.description}</p>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-24 lg:py-32 relative bg-slate-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="education" rule=RevealRule::amount(0.3)>
                    <SectionHeading
                        title="Education"
                        subtitle="My academic journey so far."
                    />
                </Reveal>
                <Timeline prefix="education" items=EDUCATION />
            </div>
        </section>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-24 lg:py-32 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="experience" rule=RevealRule::amount(0.5)>
                    <SectionHeading
                        title="Experience"
                        subtitle="Where I have put my skills to work."
                    />
                </Reveal>
                <Timeline prefix="experience" items=EXPERIENCE />
            </div>
        </section>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id="certifications" class="py-24 lg:py-32 relative bg-slate-900">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="certifications" rule=RevealRule::amount(0.2)>
                    <SectionHeading
                        title="Certifications"
                        subtitle="Courses and credentials I have completed."
                    />
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <Reveal
                                    name=format!("certification-{i}")
                                    rule=RevealRule::amount(0.2)
                                    class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50"
                                >
                                    <h3 class="text-lg font-bold mb-2">{cert.title}</h3>
                                    <p class="text-md font-semibold text-purple-400 mb-4">
                                        {cert.issuer} " - " {cert.year}
                                    </p>
                                    <p class="text-gray-400 text-sm">{cert.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCounter(index: usize, target: u64, suffix: &'static str, label: &'static str) -> impl IntoView {
    let (node, value) = use_counter(
        format!("stat-{index}"),
        RevealRule::margin(50.0),
        target,
        Some(STAT_DURATION_MS),
    );
    view! {
        <div node_ref=node class="text-center">
            <div class="text-3xl font-bold text-purple-400">{move || value.get()} {suffix}</div>
            <div class="text-xs text-gray-400">{label}</div>
        </div>
    }
}

#[component]
pub fn Freelancing() -> impl IntoView {
    view! {
        <section id="freelancing" class="py-24 lg:py-32 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal name="freelancing" rule=RevealRule::margin(HEADING_MARGIN)>
                    <SectionHeading
                        title="Freelancing"
                        subtitle="Services I offer to businesses and individuals."
                    />
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-12">
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <StatCounter
                                        index=i
                                        target=stat.target
                                        suffix=stat.suffix
                                        label=stat.label
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <Reveal
                                    name=format!("service-{i}")
                                    rule=RevealRule::margin(HEADING_MARGIN)
                                    class="bg-slate-800/60 rounded-xl p-6 border border-slate-700/50"
                                >
                                    <h3 class="text-lg font-bold mb-2">{service.title}</h3>
                                    <p class="text-gray-400 text-sm">{service.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
