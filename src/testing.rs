//! Shared fixtures for unit tests: a miniature template tree carrying every
//! anchor the rewrite rules look for.

use std::fs;
use std::path::Path;

pub(crate) fn write_template_fixture(root: &Path) {
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
    ];
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    let files: [(&str, &str); 19] = [
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
            "---\nconst contactInfo = [\n    {\n        type: \"Direccion\",\n        value: \"Avda. Balmaceda N\u{b0}4415, La Serena\",\n        icon: \"fas fa-map-marker-alt\",\n        link: \"#\",\n        isExternal: true\n    }\n];\n---\n<a href: \"https://web.facebook.com/wildcarscl\">Wildcars - Automotora</a>\n<span>Wildcars</span>\n<p>\u{a9} 2024 Wildcars. Todos los derechos reservados.</p>\n",
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
    ];
    for (path, content) in files {
        fs::write(root.join(path), content).unwrap();
    }

    // Binary asset: must survive generation byte-identical.
    fs::write(root.join("public/logo.webp"), [0x52, 0x49, 0x46, 0x46, 0x00, 0xef, 0x44, 0x44])
        .unwrap();
}
