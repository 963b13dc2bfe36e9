//! Shared testing utilities for dealersite CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Each context gets its own work directory holding a miniature copy of the
/// site template with every anchor the rewrite rules look for, plus the
/// excluded entries a real template checkout would carry.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        ctx.write_template_fixture();
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the template fixture inside the work directory.
    pub fn template_path(&self) -> PathBuf {
        self.work_dir.join("template")
    }

    /// Path a generated site lands at for the given slug.
    pub fn site_path(&self, slug: &str) -> PathBuf {
        self.work_dir.join(slug)
    }

    /// Write a JSON configuration file into the work directory.
    pub fn write_config(&self, file_name: &str, json: &str) -> PathBuf {
        let path = self.work_dir.join(file_name);
        fs::write(&path, json).expect("Failed to write config fixture");
        path
    }

    /// Read a file from a generated site.
    pub fn read_site_file(&self, slug: &str, relative: &str) -> String {
        let path = self.site_path(slug).join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Build a command for invoking the compiled `dealersite` binary.
    ///
    /// Cloudflare credentials are scrubbed so tests never provision anything
    /// against the real API; individual tests opt back in explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dealersite").expect("Failed to locate dealersite binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("CLOUDFLARE_API_TOKEN")
            .env_remove("CLOUDFLARE_ACCOUNT_ID");
        cmd
    }

    fn write_template_fixture(&self) {
        let template = self.template_path();
        let dirs = [
            "src/layouts",
            "src/components/navbar",
            "src/components/footer",
            "src/components/hamburger-menu",
            "src/components/hero-slider",
            "src/components/testimonials",
            "src/components/service-cars",
            "src/components/whatsapp-button",
            "src/pages/api",
            "src/styles",
            "public",
            "node_modules/leftpad",
            "dist",
        ];
        for dir in dirs {
            fs::create_dir_all(template.join(dir)).unwrap();
        }

        let files: [(&str, &str); 20] = [
            ("package.json", "{\n  \"name\": \"wildcars-template\",\n  \"private\": true\n}\n"),
            (
                "src/layouts/Layout.astro",
                "---\nconst site = 'https://www.autoloa.cl';\nconsole.log(\"layout mounted\");\n---\n<slot />\n",
            ),
            (
                "src/components/navbar/Navbar.astro",
                "<img src=\"/logowildars.webp\" alt=\"Wildcars Logo\" />\nconst links = [\n  { href: \"https://web.facebook.com/wildcarscl\" },\n  { href: \"https://www.instagram.com/wildcarscl\" },\n];\n",
            ),
            (
                "src/components/footer/Footer.astro",
                "---\nconst contactInfo = [\n    {\n        type: \"Direccion\",\n        value: \"Avda. Balmaceda N\u{b0}4415, La Serena\",\n        icon: \"fas fa-map-marker-alt\",\n        link: \"#\",\n        isExternal: true\n    }\n];\n---\n<a href: \"https://web.facebook.com/wildcarscl\">Wildcars - Automotora</a>\n<span class=\"text-red-500\">Wildcars</span>\n<p>\u{a9} 2024 Wildcars. Todos los derechos reservados.</p>\n",
            ),
            ("src/components/hamburger-menu/Hamburger.astro", "<span>Wild Cars</span>\n"),
            (
                "src/components/hero-slider/Hero.tsx",
                "const slideImages: SlideData[] = [\n  {\n    src: slide01.src,\n    alt: \"Interior moderno de automovil\",\n    title: \"En Wild Cars tenemos tu proximo auto\",\n    subtitle: \"Agenda tu visita\",\n  },\n];\n",
            ),
            (
                "src/components/testimonials/Testimonials.astro",
                "const testimonials: Testimonial[] = [\n    {\n        name: \"Cliente Ejemplo\",\n        description: \"Excelente servicio\",\n        rating: 5,\n        avatar: \"CE\"\n    }\n];\n",
            ),
            (
                "src/components/service-cars/Services.astro",
                "const services = [\n  {\n    img: '/image-service-01.webp',\n    title: 'Compra de vehiculos',\n    desc: 'Te compramos tu auto'\n  }\n];\n",
            ),
            (
                "src/components/whatsapp-button/Whatsapp.astro",
                "const whatsappNumber = '+56940731529'\nconst defaultMessage = 'Hola, vi su sitio web'\n",
            ),
            (
                "src/pages/index.astro",
                "<Layout title=\"Automotriz Copayapu - Autos usados\" description=\"Compra y vende vehiculos en La Serena\" />\n",
            ),
            (
                "src/pages/catalogo.astro",
                "<Layout title=\"Cat\u{e1}logo - Automotora\" description=\"Cat\u{e1}logo de veh\u{ed}culos\" />\n",
            ),
            (
                "src/pages/contacto.astro",
                "<Layout title=\"Contacto - Automotora\" description=\"Estamos aqu\u{ed} para ayudarte\">\n  <a>+56 9 4073 1529</a>\n  <a>linaarevalo.copayapu@gmail.com</a>\n  <p>Avda. Balmaceda N\u{b0}4415, La Serena.</p>\n  <p>Lun - Vie: 10:00 - 19:00<br>S\u{e1}b: 10:00 - 14:00</p>\n  <iframe src=\"https://www.google.com/maps/embed?pb=!1m18\"></iframe>\n</Layout>\n",
            ),
            (
                "src/pages/nosotros.astro",
                "<Layout title=\"Nosotros - Wildcars\" description=\"Conoce m\u{e1}s sobre nosotros\">\n  <h2>Bienvenido a la experiencia Wildcars. Donde los buenos autos encuentran buenos due\u{f1}os.</h2>\n  <p>En <strong>Automotriz Copayapu</strong> trabajamos con transparencia\n  y compromiso, entregando vehiculos de calidad.</p>\n</Layout>\n",
            ),
            (
                "src/pages/api/send-email.ts",
                "    const { error } = await resend.emails.send({\n      to: [\"linaarevalo.copayapu@gmail.com\"],\n      cc: [\"ventas@wildcars.cl\"],\n      subject: \"Nuevo mensaje\",\n    });\n",
            ),
            (
                "src/styles/global.css",
                ".btn { background: #ef4444; }\n.btn:hover { background: #dc2626; }\n.accent { color: #ff3c00; }\n",
            ),
            ("public/robots.txt", "User-agent: *\n"),
            ("node_modules/leftpad/index.js", "module.exports = () => {};\n"),
            (".env", "VENPU_API_KEY=\"leaked\"\n"),
            ("package-lock.json", "{}\n"),
            ("dist/bundle.js", "var leftover = '#ef4444';\n"),
        ];
        for (path, content) in files {
            fs::write(template.join(path), content).unwrap();
        }

        // Binary asset: must survive generation byte-identical.
        fs::write(template.join("public/logo.webp"), LOGO_BYTES).unwrap();
    }
}

/// Raw bytes of the fixture's binary asset.
#[allow(dead_code)]
pub const LOGO_BYTES: [u8; 8] = [0x52, 0x49, 0x46, 0x46, 0x00, 0xef, 0x44, 0x44];

/// Minimal valid configuration used by most scenarios.
#[allow(dead_code)]
pub const ACME_CONFIG: &str =
    r#"{"name": "Acme Motors", "slug": "acme-motors", "domain": "www.acme-motors.cl"}"#;
