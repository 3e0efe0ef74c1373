use yew::prelude::*;

use crate::Overlays;

// Inline placeholder shown until the lazy loader swaps in the real image.
const PLACEHOLDER_SRC: &str =
    "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='4' height='3'/>";

struct GalleryEntry {
    image: &'static str,
    title: &'static str,
    description: &'static str,
}

static ENTRIES: [GalleryEntry; 6] = [
    GalleryEntry {
        image: "/assets/gallery/workshop.jpg",
        title: "Robotics Workshop",
        description: "Hands-on build night with the robotics team",
    },
    GalleryEntry {
        image: "/assets/gallery/hackathon.jpg",
        title: "Spring Hackathon",
        description: "48 hours, 12 teams, far too much coffee",
    },
    GalleryEntry {
        image: "/assets/gallery/bridge.jpg",
        title: "Bridge Competition",
        description: "Popsicle sticks versus physics",
    },
    GalleryEntry {
        image: "/assets/gallery/outreach.jpg",
        title: "STEM Outreach Day",
        description: "Demos for local high school students",
    },
    GalleryEntry {
        image: "/assets/gallery/rocket.jpg",
        title: "Rocket Launch",
        description: "Model rocketry day at the field",
    },
    GalleryEntry {
        image: "/assets/gallery/banquet.jpg",
        title: "End of Year Banquet",
        description: "Celebrating the graduating members",
    },
];

/// Photo grid; clicking an item opens it in the lightbox.
#[function_component(Gallery)]
pub fn gallery() -> Html {
    let overlays = use_context::<Overlays>().expect("overlay context not provided");

    html! {
        <div class="gallery-grid">
            {
                for ENTRIES.iter().map(|entry| {
                    let overlays = overlays.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        overlays.open_lightbox(entry.image, entry.title, entry.description);
                    });
                    html! {
                        <div class="gallery-item" onclick={onclick}>
                            <img
                                src={PLACEHOLDER_SRC}
                                data-src={entry.image}
                                alt={entry.title}
                            />
                            <div class="gallery-overlay">
                                <h3>{ entry.title }</h3>
                                <p>{ entry.description }</p>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
