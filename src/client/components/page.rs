use dioxus::prelude::*;

/// Page shell: pads content below the fixed navbar and gives the board
/// room to scroll horizontally.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen bg-base-100 px-4 pb-6 pt-[72px] {class}",
            {children}
        }
    )
}
