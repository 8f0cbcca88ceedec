//! Built-in presets: role templates and quick-start bundles.

use super::Preset;

pub(crate) static PRESETS: &[Preset] = &[
    // Role templates
    Preset {
        id: "frontend-starter",
        name: "Frontend Developer",
        description: "Modern frontend development with React, Vue, or Angular",
        role: Some("frontend"),
        apps: &["vscode", "chrome", "figma", "postman", "raycast", "1password"],
        tweaks: &[
            "show-hidden-files",
            "fast-key-repeat",
            "dark-mode-menubar",
            "show-file-extensions",
            "expanded-save-panels",
        ],
    },
    Preset {
        id: "backend-starter",
        name: "Backend Developer",
        description: "Backend development with databases, APIs, and terminal tools",
        role: Some("backend"),
        apps: &["vscode", "warp", "docker", "tableplus", "postman", "1password"],
        tweaks: &[
            "show-hidden-files",
            "enable-zsh-shell",
            "disable-natural-scrolling",
            "auto-hide-dock",
            "show-path-bar",
        ],
    },
    Preset {
        id: "fullstack-productivity",
        name: "Fullstack Developer",
        description: "Frontend and backend tools in one setup",
        role: Some("fullstack"),
        apps: &[
            "cursor",
            "warp",
            "docker",
            "postman",
            "tableplus",
            "raycast",
            "1password",
            "rectangle",
        ],
        tweaks: &[
            "show-hidden-files",
            "fast-key-repeat",
            "auto-hide-dock",
            "show-path-bar",
            "expanded-save-panels",
        ],
    },
    Preset {
        id: "devops-engineer",
        name: "DevOps Engineer",
        description: "Container management, terminal, and security tooling",
        role: Some("devops"),
        apps: &["vscode", "warp", "docker", "postman", "rectangle", "1password"],
        tweaks: &[
            "show-hidden-files",
            "enable-zsh-shell",
            "disable-dashboard",
            "firewall-stealth-mode",
            "show-library-folder",
        ],
    },
    // Quick-start bundles
    Preset {
        id: "developer",
        name: "Developer Setup",
        description: "Essential tools for software development",
        role: None,
        apps: &["vscode", "git", "node", "docker", "iterm2", "1password", "rectangle"],
        tweaks: &["show-hidden-files", "show-file-extensions"],
    },
    Preset {
        id: "designer",
        name: "Designer Setup",
        description: "Creative tools for designers",
        role: None,
        apps: &["figma", "pixelmator-pro", "notion", "1password", "alfred"],
        tweaks: &["show-hidden-files", "show-file-extensions"],
    },
    Preset {
        id: "productivity",
        name: "Productivity Setup",
        description: "Apps and tweaks to maximize efficiency",
        role: None,
        apps: &["notion", "obsidian", "raycast", "1password", "rectangle", "slack"],
        tweaks: &["show-hidden-files", "disable-dock-animation", "auto-hide-dock"],
    },
    Preset {
        id: "minimal",
        name: "Minimal Setup",
        description: "Just the essentials",
        role: None,
        apps: &["vscode", "git", "1password", "rectangle"],
        tweaks: &["show-hidden-files"],
    },
];
