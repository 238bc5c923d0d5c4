//! Home Page
//!
//! The whole landing page: nav, hero, programs, guarantee, pricing
//! calculator, testimonials, FAQ, contact and footer.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::contact::{CONTACT_EMAIL, ContactSection, WEBSITE};
use super::pricing::PricingSection;
use super::testimonials::TestimonialsSection;
use crate::components::{FaqItem, FeatureCard, HowStep, Section, SectionHeading, Stat};

const NAV_LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#how", "How it Works"),
    ("#guarantee", "Guarantee"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <NavBar />
            <Hero />
            <TrustStrip />
            <Services />
            <HowItWorks />
            <Guarantee />
            <PricingSection />
            <TestimonialsSection />
            <Faq />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="topbar">
            <div class="container topbar-inner">
                <a href="#home" class="brand">
                    <div class="brand-mark">"🎓"</div>
                    <div>
                        <div class="brand-kicker">"Future MD Academy"</div>
                        <div class="brand-name">"MCAT Tutoring"</div>
                    </div>
                </a>

                <nav class="nav-desktop">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                    <a href="#contact" class="btn btn-gold">"Free Consultation"</a>
                </nav>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_open.update(|v| *v = !*v)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || open.get()>
                <nav class="nav-mobile container">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href on:click=move |_| set_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn btn-gold" on:click=move |_| set_open.set(false)>
                        "Free Consultation"
                    </a>
                </nav>
            </Show>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <Section id="home" variant="hero bg-navy">
            <div class="hero-grid">
                <div>
                    <span class="pill">
                        "✨ Top 5% Tutors • Top 1% Section Specialists • +10 Points Guaranteed"
                    </span>
                    <h1>
                        "Crush the MCAT with personalized coaching designed around "
                        <span class="gold">"you"</span>
                    </h1>
                    <p class="lead">
                        "One-on-one tutoring with specialists for C/P, CARS, B/B, and P/S, custom study plans, and test-taking systems built by 100th percentile scorers."
                    </p>
                    <div class="cta">
                        <a href="#contact" class="btn btn-gold">"Get Your FREE Consultation →"</a>
                        <a href="#services" class="btn btn-outline">"Explore Our Programs"</a>
                    </div>
                    <div class="stats">
                        <Stat value="518+" label="Tutor composite scores" />
                        <Stat value="131/132" label="Section subscores" />
                        <Stat value="+10" label="Point Guarantee" />
                    </div>
                </div>

                <div class="score-card">
                    <div class="score-card-header">
                        <div class="score-card-title">"Student Score Trend"</div>
                        <div class="stars">"★★★★★"</div>
                    </div>
                    <div class="score-card-body">
                        <div class="score">
                            <div class="score-value">"516.3"</div>
                            <div class="score-label">"Average Student Score"</div>
                        </div>
                        <div class="score">
                            <div class="score-value">"14.1"</div>
                            <div class="score-label">"Average Score Increase"</div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn TrustStrip() -> impl IntoView {
    view! {
        <div class="trust-strip">
            <div class="container trust-items">
                <div>"🛡 Guaranteed Score Growth"</div>
                <div>"🏅 Top 5% Tutors"</div>
                <div>"🚀 Fast Score Momentum"</div>
                <div>"🤝 Compatibility Match"</div>
            </div>
        </div>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <Section id="services">
            <SectionHeading
                title="Not all MCAT prep is created equal. Here's why serious students choose us."
                subtitle="Expert-led MCAT prep with proven results and personalized coaching designed around your unique needs"
            />
            <div class="grid-3">
                <FeatureCard icon="🧠" title="Top 1% Section Specialists">
                    "Tutors with ≥518 overall and 131/132 in their specialized section. Get expert guidance in C/P, CARS, B/B, and P/S from those who've mastered each domain."
                </FeatureCard>
                <FeatureCard icon="📈" title="Compatibility-Based Matching">
                    "We match you with a tutor based on compatibility and comprehensive strength/weakness analysis to ensure the best learning experience."
                </FeatureCard>
                <FeatureCard icon="🕑" title="Study Schedules by 100th Percentile Scorers">
                    "Custom study plans and strategies created by 100th percentile scorers, designed around your timeline and goals."
                </FeatureCard>
                <FeatureCard icon="🕑" title="Flexible Scheduling">
                    "Evenings, weekends, and accelerated plans available. Regular check-ins in between sessions to maintain consistency."
                </FeatureCard>
                <FeatureCard icon="👥" title="10% Hours Refunded After 20 Hours">
                    "If you don't see a +10 point increase after 20 hours of tutoring, we'll refund 10% of your hours. We stand behind our results."
                </FeatureCard>
                <FeatureCard icon="📖" title="Personalized Content Review">
                    "Focused content review tailored to your specific knowledge gaps and learning style, not generic one-size-fits-all approaches."
                </FeatureCard>
            </div>
        </Section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <Section id="how" variant="bg-white">
            <SectionHeading title="How it works" subtitle="Simple, transparent, effective." />
            <div class="grid-3">
                <HowStep step=1 title="Free Consultation">
                    "Share your target schools, test date, and constraints. We identify your quickest win conditions."
                </HowStep>
                <HowStep step=2 title="Match with a Specialist">
                    "We pair you with a tutor whose strengths and teaching style complement your needs."
                </HowStep>
                <HowStep step=3 title="Custom Plan + Coaching">
                    "Follow a week-by-week schedule. Meet regularly to refine timing, reasoning, and endurance."
                </HowStep>
            </div>
        </Section>
    }
}

#[component]
fn Guarantee() -> impl IntoView {
    view! {
        <Section id="guarantee" variant="bg-navy">
            <div class="grid-2">
                <div>
                    <h2>"+10 Points Guaranteed"</h2>
                    <p>
                        "Complete 20 hours of tutoring and follow your custom plan. If you don't gain at least 10 points from your verified baseline, we'll refund 10% of your hours."
                    </p>
                    <ul class="checklist">
                        <li>"Eligibility reviewed during your consult"</li>
                        <li>"Applies to official AAMC full-length scaled scores"</li>
                        <li>"Transparent terms, no fine print surprises"</li>
                    </ul>
                </div>
                <blockquote class="card tutor-quote">
                    <p>
                        "Working with students at Future MD Academy, I’ve seen how much of a difference a structured, personalized plan makes. When students know they’re not studying alone and have someone guiding the process, their confidence—and scores—move fast."
                    </p>
                    <footer>"Teri Johnson"</footer>
                </blockquote>
            </div>
        </Section>
    }
}

#[component]
fn Faq() -> impl IntoView {
    view! {
        <Section id="faq" variant="bg-white">
            <SectionHeading title="FAQ" subtitle="Quick answers to common questions." />
            <div class="grid-2">
                <FaqItem
                    q="Who are the tutors?"
                    a="All coaches are top 5% scorers (≥518) with demonstrated section expertise (131/132). We match you based on strengths and teaching style."
                />
                <FaqItem
                    q="Do you offer online sessions?"
                    a="Yes. We tutor via Zoom/Google Meet with shared whiteboarding and recorded notes when requested."
                />
                <FaqItem
                    q="What materials do you use?"
                    a="AAMC resources first, paired with high-yield third-party practice tailored to your needs."
                />
                <FaqItem
                    q="How does the guarantee work?"
                    a="With 20 hours completed and adherence to your plan, we guarantee a +10 point increase from your verified baseline or refund 10% of your hours."
                />
            </div>
        </Section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <div class="brand-name">"Future MD Academy"</div>
                    <div class="brand-kicker">"MCAT Tutoring"</div>
                    <p>"Top 5% tutors. Top 1% section specialists. Guaranteed score growth."</p>
                </div>
                <div>
                    <div class="footer-heading">"Company"</div>
                    <ul>
                        <li><a href="#services">"Services"</a></li>
                        <li><a href="#pricing">"Pricing"</a></li>
                        <li><a href="#faq">"FAQ"</a></li>
                    </ul>
                </div>
                <div>
                    <div class="footer-heading">"Legal"</div>
                    <ul>
                        <li><a href="#">"Terms"</a></li>
                        <li><a href="#">"Privacy"</a></li>
                    </ul>
                </div>
                <div>
                    <div class="footer-heading">"Contact"</div>
                    <ul>
                        <li>{CONTACT_EMAIL}</li>
                        <li>"123-456-789"</li>
                        <li>{WEBSITE}</li>
                    </ul>
                </div>
            </div>
            <div class="copyright">
                {format!("© {year} Future MD Academy. All rights reserved.")}
            </div>
        </footer>
    }
}
