//! Fixed page chrome around the rendered tree.

use crate::render::escape::escape_html;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Folder Structure</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            margin: 20px;
            color: #333;
        }
        h1 {
            color: #2c3e50;
            border-bottom: 1px solid #eee;
            padding-bottom: 10px;
        }
        .tree {
            margin-top: 20px;
        }
        .folder {
            font-weight: bold;
            color: #2980b9;
            cursor: pointer;
            padding: 2px 0;
        }
        .folder::before {
            content: "📁 ";
        }
        .file {
            color: #333;
            margin-left: 20px;
            padding: 2px 0;
            display: flex;
            align-items: center;
        }
        .file::before {
            content: "📄 ";
        }
        .collapsible {
            cursor: pointer;
            user-select: none;
        }
        .collapsible::before {
            content: "▶ ";
            font-size: 10px;
            color: #7f8c8d;
        }
        .active::before {
            content: "▼ ";
        }
        .nested {
            display: none;
            margin-left: 20px;
        }
        .active + .nested {
            display: block;
        }
        .file-actions {
            margin-left: 10px;
            display: inline-flex;
            gap: 5px;
        }
        .btn {
            padding: 2px 6px;
            font-size: 12px;
            border: none;
            border-radius: 3px;
            cursor: pointer;
            text-decoration: none;
        }
        .btn-view {
            background-color: #3498db;
            color: white;
        }
        .btn-download {
            background-color: #2ecc71;
            color: white;
        }
"#;

const SITEMAP_BUTTON_STYLE: &str = r#"        .btn-sitemap {
            background-color: #9b59b6;
            color: white;
            margin-top: 20px;
            padding: 8px 15px;
        }
"#;

const HEAD_TAIL: &str = r#"        .btn:hover {
            opacity: 0.8;
        }
        .excluded {
            color: #95a5a6;
            font-style: italic;
        }
    </style>
</head>
<body>
"#;

const SCRIPT: &str = r#"    <script>
        document.addEventListener('DOMContentLoaded', function() {
            var coll = document.getElementsByClassName("collapsible");
            for (var i = 0; i < coll.length; i++) {
                coll[i].addEventListener("click", function() {
                    this.classList.toggle("active");
                    var content = this.nextElementSibling;
                    if (content.style.display === "block") {
                        content.style.display = "none";
                    } else {
                        content.style.display = "block";
                    }
                });
            }

            // Root folder starts expanded
            var rootFolder = document.querySelector('.tree > .folder');
            if (rootFolder) {
                rootFolder.classList.add('active');
                rootFolder.nextElementSibling.style.display = 'block';
            }
        });
    </script>
</body>
</html>
"#;

/// Document head, body opening, heading and the tree container
pub fn preamble(root_name: &str, sitemap_link: bool) -> String {
    let mut out = String::with_capacity(HEAD.len() + HEAD_TAIL.len() + 128);
    out.push_str(HEAD);
    if sitemap_link {
        out.push_str(SITEMAP_BUTTON_STYLE);
    }
    out.push_str(HEAD_TAIL);
    out.push_str(&format!(
        "    <h1>Folder Structure: {}</h1>\n    <div class=\"tree\">\n",
        escape_html(root_name)
    ));
    out
}

/// Tree container close, optional sitemap button, behaviour script
pub fn epilogue(sitemap_link: Option<&str>) -> String {
    let mut out = String::from("\n    </div>\n");
    if let Some(href) = sitemap_link {
        out.push_str(&format!(
            "    <a href=\"{}\" class=\"btn btn-sitemap\">View XML Sitemap</a>\n",
            escape_html(href)
        ));
    }
    out.push_str(SCRIPT);
    out
}
