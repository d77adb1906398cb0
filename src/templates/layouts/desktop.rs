use crate::views::Route;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { a href=(Route::Properties.path()) { "物件ポータル" } }
                    nav {
                        @if signed_in {
                            a href=(Route::Properties.path()) class="text-base font-medium hover:text-blue-600" { "物件一覧" }
                        } @else {
                            a href=(Route::Login.path()) class="text-base font-medium hover:text-blue-600" { "ログイン" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
