use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::gallery::Gallery;
use crate::effects::typewriter::Typewriter;

struct MissionEntry {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

static MISSIONS: [MissionEntry; 3] = [
    MissionEntry {
        icon: "⚙",
        title: "Build",
        text: "Weekly build nights where members turn sketches into working hardware and software.",
    },
    MissionEntry {
        icon: "🤝",
        title: "Connect",
        text: "Industry mixers and alumni panels that put students in the same room as working engineers.",
    },
    MissionEntry {
        icon: "🚀",
        title: "Launch",
        text: "Competition teams and outreach events that take club projects beyond campus.",
    },
];

struct EventEntry {
    date: &'static str,
    title: &'static str,
    text: &'static str,
}

static EVENTS: [EventEntry; 4] = [
    EventEntry {
        date: "Sep 12",
        title: "Welcome BBQ",
        text: "Meet the project leads and sign up for a build team.",
    },
    EventEntry {
        date: "Oct 3",
        title: "Intro to PCB Design",
        text: "From schematic to fabbed board in one evening.",
    },
    EventEntry {
        date: "Nov 8",
        title: "Autumn Hackathon",
        text: "Our flagship 48-hour build marathon. Hardware encouraged.",
    },
    EventEntry {
        date: "Dec 5",
        title: "Project Showcase",
        text: "Every team demos what they shipped this term.",
    },
];

struct TeamEntry {
    photo: &'static str,
    name: &'static str,
    role: &'static str,
}

static TEAM: [TeamEntry; 4] = [
    TeamEntry { photo: "/assets/team/priya.jpg", name: "Priya Raman", role: "President" },
    TeamEntry { photo: "/assets/team/marcus.jpg", name: "Marcus Webb", role: "VP Projects" },
    TeamEntry { photo: "/assets/team/elena.jpg", name: "Elena Koval", role: "Events Lead" },
    TeamEntry { photo: "/assets/team/sam.jpg", name: "Sam Adeyemi", role: "Treasurer" },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                        overflow: hidden;
                        background: radial-gradient(ellipse at top, #11203f 0%, #0a1428 60%);
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        min-height: 4.2rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.3rem;
                        max-width: 560px;
                        margin: 1.5rem auto 2.5rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 8px;
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                        color: white;
                        text-decoration: none;
                        font-weight: bold;
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover { transform: translateY(-2px); }
                    section { padding: 5rem 2rem; max-width: 1100px; margin: 0 auto; }
                    section h2 {
                        text-align: center;
                        font-size: 2.2rem;
                        margin-bottom: 3rem;
                        color: #fff;
                    }
                    .mission-grid, .events-grid, .team-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .mission-grid { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
                    .events-grid { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
                    .team-grid { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
                    .mission-card, .event-card, .team-card, .contact-item {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 12px;
                        padding: 2rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .mission-card .mission-icon { font-size: 2rem; }
                    .event-card .event-date { color: #7EB2FF; font-weight: bold; }
                    .team-card { text-align: center; }
                    .team-card img {
                        width: 120px;
                        height: 120px;
                        border-radius: 50%;
                        object-fit: cover;
                        margin-bottom: 1rem;
                    }
                    .team-card .team-role { color: #7EB2FF; font-size: 0.9rem; }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .gallery-item {
                        position: relative;
                        border-radius: 12px;
                        overflow: hidden;
                        cursor: pointer;
                        aspect-ratio: 4 / 3;
                        background: #1a1a1a;
                    }
                    .gallery-item img { width: 100%; height: 100%; object-fit: cover; }
                    .gallery-overlay {
                        position: absolute;
                        inset: auto 0 0 0;
                        padding: 1rem;
                        background: linear-gradient(to top, rgba(0,0,0,0.85), transparent);
                        color: white;
                    }
                    .gallery-overlay h3 { margin: 0 0 0.25rem; font-size: 1.1rem; }
                    .gallery-overlay p { margin: 0; font-size: 0.85rem; color: #cbd5e1; }
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 1.5fr;
                        gap: 3rem;
                    }
                    @media (max-width: 768px) {
                        .hero-title { font-size: 2.2rem; min-height: 2.8rem; }
                        .contact-layout { grid-template-columns: 1fr; }
                    }
                    .contact-item { margin-bottom: 1.5rem; }
                    .contact-item h3 { margin-top: 0; color: #7EB2FF; }
                    .form .form-group { margin-bottom: 1.5rem; }
                    .form label {
                        display: block;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.5rem;
                    }
                    .form input, .form textarea {
                        width: 100%;
                        padding: 0.9rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        background: rgba(20, 20, 20, 0.8);
                        color: white;
                        font-size: 1rem;
                    }
                    .form .form-group.error input,
                    .form .form-group.error textarea { border-color: #ef4444; }
                    .form .error-message {
                        color: #ef4444;
                        font-size: 0.85rem;
                        margin-top: 0.4rem;
                    }
                    .btn-primary {
                        padding: 1rem 2.5rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                        color: white;
                        font-size: 1rem;
                        font-weight: bold;
                        cursor: pointer;
                        transition: opacity 0.2s ease, background 0.3s ease;
                    }
                    .btn-primary:disabled { opacity: 0.7; cursor: default; }
                    .btn-primary.sent { background: linear-gradient(135deg, #10b981, #059669); }
                    .btn-primary.failed { background: linear-gradient(135deg, #ef4444, #dc2626); }
                "#}
            </style>

            <section id="main-content" tabindex="-1" class="hero">
                <Typewriter text="ACE Engineering Club" />
                <p class="hero-subtitle">
                    {"Build real things with real people. Projects, competitions, and a \
                      community of student engineers who ship."}
                </p>
                <a class="hero-cta" href="#contact">{"Get In Touch"}</a>
            </section>

            <section id="about">
                <h2>{"What We Do"}</h2>
                <div class="mission-grid">
                    {
                        for MISSIONS.iter().map(|m| html! {
                            <div class="mission-card">
                                <div class="mission-icon">{ m.icon }</div>
                                <h3>{ m.title }</h3>
                                <p>{ m.text }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="events">
                <h2>{"Upcoming Events"}</h2>
                <div class="events-grid">
                    {
                        for EVENTS.iter().map(|e| html! {
                            <div class="event-card">
                                <div class="event-date">{ e.date }</div>
                                <h3>{ e.title }</h3>
                                <p>{ e.text }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="team">
                <h2>{"The Team"}</h2>
                <div class="team-grid">
                    {
                        for TEAM.iter().map(|t| html! {
                            <div class="team-card">
                                <img src={t.photo} alt={t.name} />
                                <h3>{ t.name }</h3>
                                <div class="team-role">{ t.role }</div>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="gallery">
                <h2>{"Gallery"}</h2>
                <Gallery />
            </section>

            <section id="contact">
                <h2>{"Contact Us"}</h2>
                <div class="contact-layout">
                    <div class="contact-info">
                        <div class="contact-item">
                            <h3>{"Email"}</h3>
                            <p>{"hello@ace-club.example"}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Meetings"}</h3>
                            <p>{"Thursdays 6pm, Engineering Building room 204"}</p>
                        </div>
                        <div class="contact-item">
                            <h3>{"Socials"}</h3>
                            <p>{"@ace_engineering on all the usual places"}</p>
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </section>
        </main>
    }
}
