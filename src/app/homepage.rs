use leptos::prelude::*;
use leptos_meta::Title;

use super::background::{CursorGlow, Starfield};
use super::cards::{AiToolCard, Badge, CertificationCard, ExperienceTimeline, ProjectCard};
use super::contact::ContactSection;
use super::navigation::{scroll_to, Navigation};
use super::proficiency::ProficiencyBar;
use super::reveal::{provide_reveal_controller, Reveal};
use crate::content::{PortfolioContent, Skill};
use crate::nav::Section;
use crate::reveal::RevealOptions;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage(content: &'static PortfolioContent) -> impl IntoView {
    provide_reveal_controller(RevealOptions::default());
    let profile = &content.profile;

    view! {
        <Title text="Cloud & AI Engineer" />
        <div class="min-h-screen">
            <CursorGlow />
            <Starfield />
            <Navigation name=profile.name.clone() />

            <section class="relative min-h-screen flex items-center justify-center px-6">
                <div
                    class="absolute inset-0 opacity-20 bg-cover bg-center bg-fixed"
                    style=format!("background-image: url({});", profile.hero_image)
                ></div>
                <div class="relative z-10 text-center max-w-4xl mx-auto">
                    <h1 class="font-heading font-bold text-5xl md:text-7xl mb-6 bg-gradient-to-b from-foreground to-accent bg-clip-text text-transparent">
                        {profile.name.clone()}
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-2xl mx-auto">
                        {profile.tagline.clone()}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="glow-hover px-8 py-3 rounded-md bg-accent text-accent-foreground hover:bg-accent/90"
                            on:click=move |_| scroll_to(Section::Projects)
                        >
                            "View My Work"
                        </button>
                        <button
                            class="glow-hover px-8 py-3 rounded-md border border-accent text-accent hover:bg-accent hover:text-accent-foreground"
                            on:click=move |_| scroll_to(Section::Contact)
                        >
                            "Get In Touch"
                        </button>
                    </div>
                </div>
            </section>

            <PageSection
                section=Section::Projects
                title="Cloud & AI Projects"
                subtitle="Building secure, scalable, and intelligent solutions powered by cloud infrastructure and generative AI"
            >
                <div class="grid md:grid-cols-2 gap-8">
                    {content
                        .projects
                        .iter()
                        .cloned()
                        .map(|project| view! { <Reveal><ProjectCard project=project /></Reveal> })
                        .collect_view()}
                </div>
            </PageSection>

            <section id=Section::Resume.id() class="py-20 px-6 relative z-10">
                <div class="container mx-auto max-w-4xl grid md:grid-cols-2 gap-12 items-center">
                    <Reveal>
                        <h2 class="font-heading font-bold text-4xl md:text-5xl mb-6">"Download Resume"</h2>
                        <p class="text-lg text-muted-foreground mb-8">
                            "Access my complete resume to learn more about my professional experience, certifications, technical achievements, and qualifications."
                        </p>
                        <a
                            href=profile.resume_path.clone()
                            target="_blank"
                            class="glow-hover inline-flex items-center px-8 py-3 rounded-md bg-accent text-accent-foreground hover:bg-accent/90"
                        >
                            <i class="extra-download mr-2"></i>
                            "Download Resume"
                        </a>
                    </Reveal>
                    <Reveal>
                        <h2 class="font-heading font-bold text-2xl md:text-3xl mb-8">"Experience Timeline"</h2>
                        <ExperienceTimeline entries=content.experience.clone() />
                    </Reveal>
                </div>
            </section>

            <PageSection
                section=Section::Certifications
                title="Certifications & Credentials"
                subtitle="Industry-recognized certifications validating my expertise in cloud, security, and systems architecture"
            >
                <div class="grid md:grid-cols-3 gap-8">
                    {content
                        .certifications
                        .iter()
                        .cloned()
                        .map(|certification| {
                            view! {
                                <Reveal>
                                    <CertificationCard certification=certification />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </PageSection>

            <PageSection
                section=Section::Skills
                title="Skills & Expertise"
                subtitle="Comprehensive technical proficiency spanning cloud computing, security, AI/ML, and more"
                narrow=true
            >
                <div class="space-y-8">
                    {content
                        .skills
                        .iter()
                        .cloned()
                        .map(|skill| view! { <Reveal><SkillRow skill=skill /></Reveal> })
                        .collect_view()}
                </div>
            </PageSection>

            <section class="py-20 px-6 relative z-10 bg-gradient-to-b from-background to-accent/5">
                <div class="container mx-auto max-w-6xl">
                    <SectionHeading
                        title="AI Tools & Frameworks"
                        subtitle="Leveraging cutting-edge generative AI platforms and tools to build intelligent solutions"
                    />
                    <div class="grid md:grid-cols-5 gap-8">
                        {content
                            .ai_tools
                            .iter()
                            .cloned()
                            .map(|tool| view! { <Reveal><AiToolCard tool=tool /></Reveal> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id=Section::About.id() class="py-20 px-6 relative z-10">
                <div class="container mx-auto max-w-4xl grid md:grid-cols-2 gap-12 items-center">
                    <Reveal>
                        <h2 class="font-heading font-bold text-4xl md:text-5xl mb-6">"About Me"</h2>
                        {content
                            .about
                            .paragraphs
                            .iter()
                            .cloned()
                            .map(|p| view! { <p class="text-lg text-muted-foreground mb-6">{p}</p> })
                            .collect_view()}
                        <div class="flex flex-wrap gap-2">
                            {content
                                .about
                                .badges
                                .iter()
                                .cloned()
                                .map(|label| view! { <Badge label=label /> })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal class="flex justify-center">
                        <img
                            src=content.about.portrait.clone()
                            alt=profile.name.clone()
                            class="w-64 h-64 md:w-80 md:h-80 object-cover object-top rounded-lg border-2 border-accent/30 shadow-lg shadow-accent/20 transition-transform duration-300 hover:scale-105"
                        />
                    </Reveal>
                </div>
            </section>

            <PageSection
                section=Section::Contact
                title="Let's Connect"
                subtitle="Ready to discuss cloud solutions, security implementations, or new opportunities? I'd love to hear from you."
            >
                <Reveal>
                    <ContactSection contacts=content.contacts.clone() />
                </Reveal>
            </PageSection>

            <footer class="py-8 px-6 border-t border-border relative z-10">
                <div class="container mx-auto max-w-6xl text-center text-muted-foreground">
                    <p>{format!("© {BUILD_YEAR} {}", profile.name)}</p>
                </div>
            </footer>
        </div>
    }
}

/// Anchored section with a revealed heading block.
#[component]
fn PageSection(
    section: Section,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] narrow: bool,
    children: Children,
) -> impl IntoView {
    let width = if narrow { "max-w-4xl" } else { "max-w-6xl" };
    view! {
        <section id=section.id() class="py-20 px-6 relative z-10">
            <div class=format!("container mx-auto {width}")>
                <SectionHeading title=title subtitle=subtitle />
                {children()}
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="font-heading font-bold text-4xl md:text-5xl mb-6">{title}</h2>
            <p class="text-xl text-muted-foreground max-w-3xl mx-auto">{subtitle}</p>
        </Reveal>
    }
}

#[component]
fn SkillRow(skill: Skill) -> impl IntoView {
    view! {
        <div class="mb-6">
            <div class="flex items-center gap-3 mb-3">
                <div class="p-2 rounded-lg bg-accent/10 text-accent text-xl">{skill.icon.glyph()}</div>
                <p class="text-sm text-muted-foreground">{skill.description}</p>
            </div>
            <ProficiencyBar
                rating=skill.rating
                label=skill.name
                grade=skill.grade
                tools=skill.tools
                mastered_label=skill.mastered_label
            />
        </div>
    }
}
