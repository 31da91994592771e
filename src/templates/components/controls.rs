use crate::domain::pipeline::{Filters, SortMode, ALL_CATEGORIES};
use maud::{html, Markup};
use url::form_urlencoded;

/// Link to the browse page for `filters`. Parameters still at their default
/// value are left out.
pub fn browse_href(filters: &Filters) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !filters.query.is_empty() {
        query.append_pair("q", &filters.query);
    }
    if filters.category != ALL_CATEGORIES {
        query.append_pair("category", &filters.category);
    }
    if filters.sort != SortMode::None {
        query.append_pair("sort", filters.sort.as_str());
    }

    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// Search box. Category and sort ride along as hidden fields so a new search
/// keeps them.
pub fn search_form(filters: &Filters) -> Markup {
    html! {
        form class="search" method="get" action="/" {
            input
                type="text"
                name="q"
                placeholder="Search listings..."
                value=(filters.query);
            @if filters.category != ALL_CATEGORIES {
                input type="hidden" name="category" value=(filters.category);
            }
            @if filters.sort != SortMode::None {
                input type="hidden" name="sort" value=(filters.sort.as_str());
            }
            button type="submit" { "Search" }
        }
    }
}

fn sort_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::None => "None",
        SortMode::Asc => "↑ Asc",
        SortMode::Desc => "↓ Desc",
    }
}

pub fn sort_toggle(filters: &Filters) -> Markup {
    html! {
        div class="sort" {
            span { "Sort by price:" }
            div class="sort-toggle" {
                @for mode in SortMode::ALL {
                    @let target = Filters { sort: mode, ..filters.clone() };
                    a class=[(filters.sort == mode).then_some("active")]
                        href=(browse_href(&target))
                        data-sort=(mode.as_str())
                    {
                        (sort_label(mode))
                    }
                }
            }
        }
    }
}

pub fn category_filter(categories: &[String], filters: &Filters) -> Markup {
    html! {
        nav class="categories" {
            @for c in categories {
                @let target = Filters { category: c.clone(), ..filters.clone() };
                a class=[(*c == filters.category).then_some("active")] href=(browse_href(&target)) {
                    (c)
                }
            }
        }
    }
}
