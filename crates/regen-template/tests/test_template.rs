//! Round-trip and region-update behavior over whole files.

use regen_template::{Fragment, MarkerSyntax, Template};

const CLASS_SOURCE: &str = "\
class V {
    // @codegen(aaa)
    func foo0() {}
    func foo1() {}
    // @end
}
";

#[test]
fn test_class_source_fragments() {
    let template = Template::parse(CLASS_SOURCE);
    let fragments = template.fragments();

    assert_eq!(fragments.len(), 3);
    assert_eq!(
        fragments[0],
        Fragment::Text("class V {\n    // @codegen(aaa)\n".to_string())
    );
    assert_eq!(
        fragments[1],
        Fragment::Placeholder {
            name: "aaa".to_string(),
            content: "    func foo0() {}\n    func foo1() {}\n".to_string(),
        }
    );
    assert_eq!(fragments[2], Fragment::Text("    // @end\n}\n".to_string()));
    assert_eq!(template.names(), vec!["aaa"]);
}

#[test]
fn test_update_then_render() {
    let mut template = Template::parse(CLASS_SOURCE);
    template.set("aaa", "    func foo2() {}\n    func foo3() {}\n");

    assert_eq!(
        template.render(),
        "\
class V {
    // @codegen(aaa)
    func foo2() {}
    func foo3() {}
    // @end
}
"
    );
}

#[test]
fn test_render_reproduces_input() {
    let inputs = [
        "",
        "no regions at all\n",
        "no trailing newline",
        CLASS_SOURCE,
        "// @codegen(a)\n// @end\n// @codegen(b)\nbody\n// @end\ntrailing\n",
        "windows\r\n// @codegen(w)\r\nbody\r\n// @end\r\n",
        "old mac\r// @codegen(m)\rbody\r// @end\r",
    ];
    for text in inputs {
        assert_eq!(Template::parse(text).render(), text, "round trip of {text:?}");
    }
}

#[test]
fn test_custom_syntax_round_trip() {
    let syntax = MarkerSyntax::new("GEN-BEGIN", "GEN-END").unwrap();
    let text = "# GEN-BEGIN(section)\nline\n# GEN-END\n";

    let mut template = Template::parse_with(&syntax, text);
    assert_eq!(template.get("section"), Some("line\n"));
    assert_eq!(template.render(), text);

    template.set("section", "other\n");
    assert_eq!(template.render(), "# GEN-BEGIN(section)\nother\n# GEN-END\n");
}

#[test]
fn test_unterminated_region_round_trip() {
    let text = "prefix\n// @codegen(open)\nbody to end of file\n";
    let template = Template::parse(text);

    assert_eq!(template.get("open"), Some("body to end of file\n"));
    assert_eq!(template.render(), text);
}
