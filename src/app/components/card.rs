use dioxus::prelude::*;

/// Bordered surface with an optional heading
#[component]
pub fn Card(
    title: Option<String>,
    /// Extra BEM modifier classes, e.g. `c-card--filter`
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "c-card {class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
