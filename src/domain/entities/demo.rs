//! Catalog of the numbered demo pages.

/// A numbered demo page served at `/demoNN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demo {
    pub number: u8,
    pub title: &'static str,
    pub summary: &'static str,
}

impl Demo {
    /// Path segment without the leading slash, e.g. `demo03`.
    pub fn slug(&self) -> String {
        format!("demo{:02}", self.number)
    }

    /// Absolute path the page is served at.
    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    /// Demos 1 to 6 have their own interactive page.
    pub fn is_interactive(&self) -> bool {
        self.number <= 6
    }
}

const fn placeholder(number: u8, title: &'static str) -> Demo {
    Demo {
        number,
        title,
        summary: "Static page with no server interaction yet.",
    }
}

pub static DEMOS: [Demo; 20] = [
    Demo {
        number: 1,
        title: "Search with form replacement",
        summary: "Search a user by name. Error1 replaces the form, Error2 keeps it using HX-Reswap.",
    },
    Demo {
        number: 2,
        title: "Slow search",
        summary: "A deliberately slow endpoint to show loading indicators.",
    },
    Demo {
        number: 3,
        title: "Multi-step add",
        summary: "Three chained forms with out-of-band list updates and virtual history URLs.",
    },
    Demo {
        number: 4,
        title: "Error pages",
        summary: "Server errors retargeted to the whole body with HX-Retarget and HX-Push-Url.",
    },
    Demo {
        number: 5,
        title: "Wizard",
        summary: "Next and previous steps with state carried in form fields.",
    },
    Demo {
        number: 6,
        title: "Delete from list",
        summary: "Soft delete with a 422 refusal for protected items.",
    },
    placeholder(7, "Demo 07"),
    placeholder(8, "Demo 08"),
    placeholder(9, "Demo 09"),
    placeholder(10, "Demo 10"),
    placeholder(11, "Demo 11"),
    placeholder(12, "Demo 12"),
    placeholder(13, "Demo 13"),
    placeholder(14, "Demo 14"),
    placeholder(15, "Demo 15"),
    placeholder(16, "Demo 16"),
    placeholder(17, "Demo 17"),
    placeholder(18, "Demo 18"),
    placeholder(19, "Demo 19"),
    placeholder(20, "Demo 20"),
];

/// Looks up a demo by number.
pub fn find(number: u8) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.number == number)
}
