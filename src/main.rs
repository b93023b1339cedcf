#![allow(non_snake_case)]

use jobtrail::client;

fn main() {
    dioxus::launch(client::App);
}
