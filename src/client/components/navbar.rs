use dioxus::prelude::*;

use crate::client::components::ToastStack;
pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Board { company: String::new(), job_title: String::new() },
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "JobTrail"
                        }
                        p { class: "text-xs",
                            "v0.1.0"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                div { class: "flex items-center gap-2",
                    a { href: "/cvs",
                        button { class: "btn btn-ghost",
                            "Resumes"
                        }
                    }
                    a { href: "/auth/login",
                        button { class: "btn btn-outline",
                            "Sign In"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}

        ToastStack { }
    }
}
