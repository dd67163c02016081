#[cfg(test)]
mod integration_html {
    use find_sample_directives::{scan_template, Directive, TemplateLine};
    use std::fs;
    use tempfile::tempdir;

    /// A reveal.js style template read back from disk keeps its layout.
    #[test]
    fn test_scan_template_file() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let template_path = dir.path().join("index.html.in");
        let content = "\
<section data-markdown>
  <textarea data-template>
## Widgets
  %%% widgets/widget.cpp # construct %%%
---
%%% widgets/widget.cpp#destroy%%%
  </textarea>
</section>
";
        fs::write(&template_path, content).expect("Failed to write template");

        let read_back = fs::read_to_string(&template_path).expect("Failed to read template");
        let lines = scan_template(&read_back);
        assert_eq!(lines.len(), 8);

        let directives: Vec<&Directive> = lines
            .iter()
            .filter_map(|line| match line {
                TemplateLine::Directive(d) => Some(d),
                TemplateLine::Text(_) => None,
            })
            .collect();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].file, "widgets/widget.cpp");
        assert_eq!(directives[0].name, "construct");
        assert_eq!(directives[1].name, "destroy");

        assert_eq!(lines[0], TemplateLine::Text("<section data-markdown>\n"));
        assert_eq!(lines[7], TemplateLine::Text("</section>\n"));
    }
}
