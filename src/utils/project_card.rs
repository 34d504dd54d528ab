use serde::Serialize;

use crate::{
    models::project::{CodeProject, PreviewItem, Repository},
    utils::carousel::{AutoAdvance, CarouselState},
};

pub fn project_href(slug: &str) -> String {
    format!("/work/code/{slug}")
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// View model of one code project card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeProjectCard {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blurb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit: Option<ExternalLink>,
    pub more_href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previews: Option<PreviewSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<Repository>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<RelatedLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreviewSection {
    Static {
        preview: PreviewItem,
    },
    #[serde(rename_all = "camelCase")]
    Carousel {
        items: Vec<PreviewItem>,
        selected_item: usize,
        auto_advance: AutoAdvance,
        infinite_loop: bool,
        labels: CarouselLabels,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselLabels {
    pub left_arrow: &'static str,
    pub right_arrow: &'static str,
    pub item: &'static str,
}

impl Default for CarouselLabels {
    fn default() -> Self {
        Self {
            left_arrow: "previous",
            right_arrow: "next",
            item: "preview",
        }
    }
}

impl PreviewSection {
    fn new(previews: &[PreviewItem], state: CarouselState) -> Option<Self> {
        match previews {
            [] => None,
            [only] => Some(PreviewSection::Static {
                preview: only.clone(),
            }),
            items => Some(PreviewSection::Carousel {
                items: items.to_vec(),
                selected_item: state.selected_item.min(items.len() - 1),
                auto_advance: state.auto_advance,
                infinite_loop: true,
                labels: CarouselLabels::default(),
            }),
        }
    }
}

impl CodeProjectCard {
    pub fn new(project: &CodeProject, state: CarouselState) -> Self {
        Self {
            slug: project.slug.clone(),
            name: project.name.clone(),
            blurb: project.blurb.clone().filter(|b| !b.is_empty()),
            visit: project.url.as_ref().filter(|u| !u.is_empty()).map(|url| ExternalLink {
                href: url.clone(),
                target: "_blank",
                rel: "noopener noreferrer",
            }),
            more_href: project_href(&project.slug),
            previews: PreviewSection::new(&project.previews, state),
            repositories: non_empty(project.repositories.clone()),
            related: non_empty(
                project
                    .related
                    .iter()
                    .map(|r| RelatedLink {
                        name: r.name.clone(),
                        href: project_href(&r.slug),
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::RelatedProject;
    use crate::utils::carousel::CarouselEvent;

    fn preview(name: &str) -> PreviewItem {
        PreviewItem {
            file_name: name.to_string(),
            caption: None,
        }
    }

    fn project(previews: Vec<PreviewItem>) -> CodeProject {
        CodeProject {
            slug: "f1-stats".to_string(),
            name: "F1 Stats".to_string(),
            blurb: None,
            url: None,
            previews,
            repositories: vec![],
            related: vec![],
        }
    }

    #[test]
    fn no_previews_renders_no_section() {
        let card = CodeProjectCard::new(&project(vec![]), CarouselState::default());
        assert!(card.previews.is_none());
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("previews").is_none());
    }

    #[test]
    fn single_preview_is_static() {
        let card = CodeProjectCard::new(&project(vec![preview("a.mp4")]), CarouselState::default());
        assert_eq!(
            card.previews,
            Some(PreviewSection::Static {
                preview: preview("a.mp4")
            })
        );
    }

    #[test]
    fn multiple_previews_render_a_carousel() {
        let previews = vec![preview("a.mp4"), preview("b.mp4"), preview("c.png")];
        let (state, _) = CarouselState::default().transition(CarouselEvent::Select(2), previews.len());
        let card = CodeProjectCard::new(&project(previews.clone()), state);

        match card.previews {
            Some(PreviewSection::Carousel {
                items,
                selected_item,
                auto_advance,
                infinite_loop,
                ..
            }) => {
                assert_eq!(items, previews);
                assert_eq!(selected_item, 2);
                assert_eq!(auto_advance, AutoAdvance::SuppressedOnce);
                assert!(infinite_loop);
            }
            other => panic!("expected carousel, got {other:?}"),
        }
    }

    #[test]
    fn optional_sections_follow_project_data() {
        let mut p = project(vec![]);
        assert!(CodeProjectCard::new(&p, CarouselState::default()).visit.is_none());

        p.url = Some("https://example.com".to_string());
        p.blurb = Some("Charts of every season".to_string());
        p.related = vec![RelatedProject {
            slug: "portfolio".to_string(),
            name: "Portfolio".to_string(),
        }];
        let card = CodeProjectCard::new(&p, CarouselState::default());

        let visit = card.visit.unwrap();
        assert_eq!(visit.target, "_blank");
        assert_eq!(visit.rel, "noopener noreferrer");
        assert_eq!(card.more_href, "/work/code/f1-stats");
        assert!(card.repositories.is_none());
        assert_eq!(card.related.unwrap()[0].href, "/work/code/portfolio");
    }
}
