//! End-to-end binding tests: raw markup in, output trees out.
//!
//! Everything here goes through `parse_template` first, so the scenarios
//! exercise the same path a live page would: parse → group → component →
//! transform.

#[cfg(test)]
mod tests {
    use crate::{
        apply, bind, parse_template, transform, BindOptions, Component, Content, ElementNode,
        OutputNode, StaticChannel, TemplateNode,
    };
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn first_element(html: &str) -> ElementNode {
        let nodes = parse_template(html).unwrap();
        match nodes.into_iter().next() {
            Some(TemplateNode::Element(element)) => element,
            other => panic!("expected element, got {:?}", other),
        }
    }

    fn node_of(content: &Content) -> &OutputNode {
        match content {
            Content::Node(node) => node,
            Content::Scalar(value) => panic!("expected node, got scalar {:?}", value),
        }
    }

    #[test]
    fn test_scalar_binding_through_markup() {
        let element = first_element(r#"<h1 class="title" data-prop="headline"></h1>"#);

        let out = apply(&element, &json!({"headline": "breaking"}));

        // apply does not narrow; transform does.
        assert_eq!(out.content.len(), 0);

        let out = transform(
            &TemplateNode::Element(element),
            &json!({"headline": "breaking"}),
        )
        .unwrap();
        let out = node_of(&out).clone();
        assert_eq!(out.tag, "h1");
        assert_eq!(out.props["className"], json!("title"));
        assert_eq!(out.props["data-prop"], json!("headline"));
        assert_eq!(out.content, vec![Content::Scalar(json!("breaking"))]);
    }

    #[test]
    fn test_nested_scopes_route_object_keys() {
        let element = first_element(
            r#"<article>
                 <h1 data-prop="title"></h1>
                 <p data-prop="body"></p>
               </article>"#,
        );

        let out = apply(&element, &json!({"title": "wat", "body": "hahaha"}));

        assert_eq!(out.content.len(), 2);
        assert_eq!(
            node_of(&out.content[0]).content,
            vec![Content::Scalar(json!("wat"))]
        );
        assert_eq!(
            node_of(&out.content[1]).content,
            vec![Content::Scalar(json!("hahaha"))]
        );
    }

    #[test]
    fn test_array_fan_out_through_markup() {
        let element = first_element(r#"<li class="post" data-prop="posts"></li>"#);
        let node = TemplateNode::Element(element);

        let out = transform(&node, &json!({"posts": ["one", "two", "three"]})).unwrap();
        let out = node_of(&out);

        assert_eq!(out.tag, "div");
        assert!(out.props.is_empty());
        assert_eq!(out.content.len(), 3);
        for (entry, expected) in out.content.iter().zip(["one", "two", "three"]) {
            let li = node_of(entry);
            assert_eq!(li.tag, "li");
            assert_eq!(li.props["className"], json!("post"));
            assert_eq!(li.content, vec![Content::Scalar(json!(expected))]);
        }
    }

    #[test]
    fn test_array_of_objects_fans_out_whole_subtrees() {
        let element = first_element(
            r#"<article data-prop="posts">
                 <h2 data-prop="title"></h2>
                 <p data-prop="body"></p>
               </article>"#,
        );
        let node = TemplateNode::Element(element);

        let data = json!({"posts": [
            {"title": "a", "body": "aa"},
            {"title": "b", "body": "bb"}
        ]});
        let out = transform(&node, &data).unwrap();
        let out = node_of(&out);

        assert_eq!(out.tag, "div");
        assert_eq!(out.content.len(), 2);
        let second = node_of(&out.content[1]);
        assert_eq!(second.tag, "article");
        assert_eq!(
            node_of(&second.content[0]).content,
            vec![Content::Scalar(json!("b"))]
        );
        assert_eq!(
            node_of(&second.content[1]).content,
            vec![Content::Scalar(json!("bb"))]
        );
    }

    #[test]
    fn test_combination_binding_through_markup() {
        let element = first_element(r#"<span data-prop="badge"></span>"#);
        let node = TemplateNode::Element(element);

        let data = json!({"badge": {
            "_content_": 42,
            "_attrs_": {"_attrs_": true, "class": "badge-hot", "tabindex": "0"}
        }});
        let out = transform(&node, &data).unwrap();
        let out = node_of(&out);

        assert_eq!(out.props["className"], json!("badge-hot"));
        assert_eq!(out.props["tabIndex"], json!("0"));
        assert_eq!(out.content, vec![Content::Scalar(json!(42))]);
    }

    #[test]
    fn test_missing_scope_key_degrades_to_template_structure() {
        let element = first_element(
            r#"<div data-prop="absent"><p>static fallback</p><!-- note --></div>"#,
        );
        let node = TemplateNode::Element(element);

        let out = transform(&node, &json!({"present": 1})).unwrap();
        let out = node_of(&out);

        // Comment omitted, literal child kept, no error.
        assert_eq!(out.content.len(), 1);
        assert_eq!(
            node_of(&out.content[0]).content,
            vec![Content::Scalar(json!("static fallback"))]
        );
    }

    #[test]
    fn test_rendered_tree_serializes_for_the_consumer() {
        let element = first_element(r#"<ul data-prop="items"></ul>"#);
        let node = TemplateNode::Element(element);

        let out = transform(&node, &json!({"items": ["a", 2]})).unwrap();
        let out = node_of(&out);

        assert_eq!(
            serde_json::to_value(out).unwrap(),
            json!({
                "tag": "div",
                "props": {},
                "content": [
                    {"tag": "ul", "props": {}, "content": ["a"]},
                    {"tag": "ul", "props": {}, "content": [2]}
                ]
            })
        );
    }

    #[test]
    fn test_component_over_parsed_template() {
        let element = first_element(
            r#"<section data-topic="feed">
                 <h1 data-prop="title"></h1>
               </section>"#,
        );
        let component = Component::new(element);

        let out = component.render(&json!({"title": "first"}));
        assert_eq!(
            node_of(&out.content[0]).content,
            vec![Content::Scalar(json!("first"))]
        );

        let out = component.render(&json!({"title": "second"}));
        assert_eq!(
            node_of(&out.content[0]).content,
            vec![Content::Scalar(json!("second"))]
        );
    }

    #[test]
    fn test_full_bind_flow_from_markup_to_sink() {
        let nodes = parse_template(
            r#"<article data-topic="posts" data-prop="latest">
                 <h2 data-prop="title"></h2>
               </article>
               <aside data-topic="stats" data-prop="visitors"></aside>"#,
        )
        .unwrap();

        let rendered: Rc<RefCell<Vec<(String, Value)>>> = Rc::new(RefCell::new(Vec::new()));
        let writer = rendered.clone();

        let feeds = json!({
            "posts": {"latest": {"title": "hello"}},
            "stats": {"visitors": 12}
        });
        let channels = bind(
            &nodes,
            BindOptions::default(),
            |topic| Box::new(StaticChannel::new(feeds[topic].clone())),
            move |topic, out| {
                writer
                    .borrow_mut()
                    .push((topic.to_string(), serde_json::to_value(out).unwrap()));
            },
        );

        assert_eq!(channels.len(), 2);
        let rendered = rendered.borrow();
        assert_eq!(rendered.len(), 2);
        assert_eq!(
            rendered[0],
            (
                "posts".to_string(),
                json!({
                    "tag": "article",
                    "props": {"data-topic": "posts", "data-prop": "latest"},
                    "content": [
                        {"tag": "h2", "props": {"data-prop": "title"}, "content": ["hello"]}
                    ]
                })
            )
        );
        assert_eq!(
            rendered[1],
            (
                "stats".to_string(),
                json!({
                    "tag": "aside",
                    "props": {"data-topic": "stats", "data-prop": "visitors"},
                    "content": [12]
                })
            )
        );
    }
}
