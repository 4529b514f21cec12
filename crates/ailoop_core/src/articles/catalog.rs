//! Fixed article catalog: categories, cover images and title/keyword templates.

/// One entry to expand into a full article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleTemplate {
    pub title: &'static str,
    /// The first keyword is the phrase substituted through the prose.
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCategory {
    pub label: &'static str,
    pub cover_images: &'static [&'static str],
    pub templates: &'static [ArticleTemplate],
}

const fn template(title: &'static str, keywords: &'static [&'static str]) -> ArticleTemplate {
    ArticleTemplate { title, keywords }
}

pub const ARTICLE_CATALOG: &[ArticleCategory] = &[
    ArticleCategory {
        label: "ChatGPT Articles",
        cover_images: &[
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1676277791608-ac5cf6d5e60c?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1675271591293-9b2f078e5c0e?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1684487747385-7548cf679e32?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1655720828018-edd2daec9349?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1655720406770-c638d3fd3819?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1655720408291-e3c092ce2c50?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1655720408323-76c07f8bbee0?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1655721530289-6e4e18d7cb01?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1666364666044-7f2e09e8f23a?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "ChatGPT Prompt Engineering Mastery Guide 2026",
                &["ChatGPT prompts", "prompt engineering", "AI prompting techniques"],
            ),
            template(
                "ChatGPT API Integration Complete Developer Guide 2026",
                &["ChatGPT API", "OpenAI API integration", "API development"],
            ),
            template(
                "ChatGPT Business Automation Transform Your Workflow 2026",
                &["business automation", "ChatGPT for business", "workflow automation"],
            ),
            template(
                "ChatGPT vs Google Gemini Ultimate Comparison 2026",
                &["ChatGPT vs Gemini", "AI chatbot comparison", "best AI assistant"],
            ),
            template(
                "ChatGPT Content Creation Complete Marketing Guide 2026",
                &["AI content creation", "ChatGPT writing", "content marketing"],
            ),
            template(
                "ChatGPT for Developers Complete Coding Guide 2026",
                &["ChatGPT coding", "AI programming assistant", "code generation"],
            ),
            template(
                "ChatGPT Plus vs Free Complete Comparison Worth It 2026",
                &["ChatGPT Plus", "ChatGPT pricing", "ChatGPT subscription"],
            ),
            template(
                "ChatGPT for Education Complete Teaching Guide 2026",
                &["ChatGPT education", "AI in teaching", "educational technology"],
            ),
            template(
                "ChatGPT Security and Privacy Complete Protection Guide 2026",
                &["ChatGPT security", "AI privacy", "data protection"],
            ),
            template(
                "ChatGPT Advanced Features Tricks and Tips 2026",
                &["ChatGPT features", "ChatGPT tricks", "advanced ChatGPT tips"],
            ),
        ],
    },
    ArticleCategory {
        label: "Google Gemini Articles",
        cover_images: &[
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1639322537228-f710d846310a?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1677756119517-756a188d2d94?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1676299081847-824916de030a?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1677442135703-1787eea5ce01?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1677442136003-e5c8a1c5c1b7?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1677442135858-05d8d7e3e1b9?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1686191128892-81c5c05a4b5e?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "Google Gemini AI Complete Beginner Guide 2026",
                &["Google Gemini", "Gemini AI", "Google AI assistant"],
            ),
            template(
                "Gemini Pro vs ChatGPT Detailed Feature Comparison 2026",
                &["Gemini vs ChatGPT", "AI comparison", "best AI model"],
            ),
            template(
                "Google Gemini API Integration Developer Guide 2026",
                &["Gemini API", "Google AI API", "API integration"],
            ),
            template(
                "Gemini Ultra Features and Capabilities Deep Dive 2026",
                &["Gemini Ultra", "advanced AI features", "Gemini capabilities"],
            ),
            template(
                "Google Gemini for Business Enterprise Guide 2026",
                &["Gemini business", "enterprise AI", "business automation"],
            ),
            template(
                "Gemini Multimodal AI Complete Implementation Guide 2026",
                &["multimodal AI", "Gemini features", "AI capabilities"],
            ),
            template(
                "Google Gemini Prompt Engineering Best Practices 2026",
                &["Gemini prompts", "prompt engineering", "AI optimization"],
            ),
            template(
                "Gemini AI Safety and Ethics Complete Guide 2026",
                &["AI safety", "ethical AI", "responsible AI"],
            ),
            template(
                "Google Gemini Pricing Plans Complete Comparison 2026",
                &["Gemini pricing", "AI costs", "subscription plans"],
            ),
            template(
                "Gemini AI Future Roadmap Predictions for 2026-2027",
                &["AI future", "Gemini roadmap", "AI trends"],
            ),
        ],
    },
    ArticleCategory {
        label: "AI Roadmap",
        cover_images: &[
            "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "Complete AI Learning Roadmap 2026 Beginner to Expert",
                &["AI learning path", "AI roadmap", "learn artificial intelligence"],
            ),
            template(
                "Machine Learning Career Path Complete Guide 2026",
                &["ML career", "machine learning jobs", "AI careers"],
            ),
            template(
                "Deep Learning Mastery Step-by-Step Roadmap 2026",
                &["deep learning", "neural networks", "DL roadmap"],
            ),
            template(
                "AI Engineer Skills Roadmap Complete Training Guide 2026",
                &["AI engineer skills", "AI training", "technical skills"],
            ),
            template(
                "Natural Language Processing NLP Complete Roadmap 2026",
                &["NLP roadmap", "natural language processing", "text AI"],
            ),
            template(
                "Computer Vision Learning Path Complete Guide 2026",
                &["computer vision", "image AI", "CV roadmap"],
            ),
            template(
                "AI Specialization Paths Which Track Is Right for You 2026",
                &["AI specialization", "AI career paths", "AI fields"],
            ),
            template(
                "From Zero to AI Expert 12-Month Learning Plan 2026",
                &["AI learning plan", "become AI expert", "AI bootcamp"],
            ),
            template(
                "AI Certification Guide Best Courses and Programs 2026",
                &["AI certification", "AI courses", "AI programs"],
            ),
            template(
                "AI Job Market 2026 Trends Salaries and Opportunities",
                &["AI jobs", "AI salary", "AI job market"],
            ),
        ],
    },
    ArticleCategory {
        label: "Video Generation Tools",
        cover_images: &[
            "https://images.unsplash.com/photo-1574717024653-61fd2cf4d44d?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1492619375914-88005aa9e8fb?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1536240478700-b869070f9279?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1626785774573-4b799315345d?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1633167606207-d840b5070fc2?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1635776062127-d379bfcba9f8?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1638913662584-731da41f5a59?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "Best AI Video Generators Complete Comparison 2026",
                &["AI video generation", "video AI tools", "AI video maker"],
            ),
            template(
                "Runway Gen-4 Complete Video Generation Guide 2026",
                &["Runway AI", "Gen-4", "AI video editing"],
            ),
            template(
                "Synthesia AI Avatar Videos Complete Tutorial 2026",
                &["Synthesia", "AI avatars", "video avatars"],
            ),
            template(
                "Pika Labs Video AI Complete Feature Guide 2026",
                &["Pika Labs", "AI video", "video generation"],
            ),
            template(
                "AI Video Editing Tools Complete Workflow Guide 2026",
                &["AI video editing", "automated editing", "video tools"],
            ),
            template(
                "Text-to-Video AI Complete Creation Guide 2026",
                &["text to video", "AI video creation", "video AI"],
            ),
            template(
                "AI Video Marketing Complete Strategy Guide 2026",
                &["video marketing", "AI marketing", "video strategy"],
            ),
            template(
                "Professional AI Videos Complete Production Guide 2026",
                &["professional videos", "AI production", "video quality"],
            ),
            template(
                "AI Video Tools Pricing Complete Cost Comparison 2026",
                &["video AI pricing", "AI costs", "video tools cost"],
            ),
            template(
                "Future of AI Video Generation Trends for 2026-2027",
                &["AI video future", "video AI trends", "emerging tech"],
            ),
        ],
    },
    ArticleCategory {
        label: "Image Generation Tools",
        cover_images: &[
            "https://images.unsplash.com/photo-1547826039-bfc35e0f1ea8?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1617791160505-6f00504e3519?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1618477388954-7852f32655ec?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1610721847196-c3559047daa2?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1620641788421-7a1c342ea42e?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1618005198919-d3d4b5a92ead?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1561998338-13ad7883b20f?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "Midjourney Mastery Complete Guide 2026 Edition",
                &["Midjourney", "AI art", "image generation"],
            ),
            template(
                "DALL-E 3 Complete Image Generation Guide 2026",
                &["DALL-E 3", "OpenAI images", "AI art generation"],
            ),
            template(
                "Stable Diffusion Complete Setup and Usage Guide 2026",
                &["Stable Diffusion", "SD AI", "open source AI"],
            ),
            template(
                "Midjourney vs DALL-E 3 Ultimate Quality Comparison 2026",
                &["Midjourney vs DALL-E", "AI image comparison", "best AI art"],
            ),
            template(
                "AI Image Prompting Complete Masterclass 2026",
                &["image prompts", "AI art prompts", "prompt engineering"],
            ),
            template(
                "Leonardo AI Complete Image Generation Guide 2026",
                &["Leonardo AI", "AI art tools", "image AI"],
            ),
            template(
                "Commercial AI Art Complete Licensing Guide 2026",
                &["AI art licensing", "commercial AI", "copyright"],
            ),
            template(
                "AI Image Editing Complete Photo Enhancement Guide 2026",
                &["AI photo editing", "image enhancement", "AI tools"],
            ),
            template(
                "Consistent AI Characters Complete Creation Guide 2026",
                &["character design", "AI characters", "consistent AI"],
            ),
            template(
                "AI Art Styles Complete Visual Guide and Examples 2026",
                &["AI art styles", "artistic styles", "AI aesthetics"],
            ),
        ],
    },
    ArticleCategory {
        label: "Productivity Articles",
        cover_images: &[
            "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1432888622747-4eb9a8f2c293?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1551836022-d5d88e9218df?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1512428559087-560fa5ceab42?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1542626991-cbc4e32524cc?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1586717791821-3f44a563fa4c?w=800&auto=format&fit=crop",
        ],
        templates: &[
            template(
                "AI Productivity Tools Complete Workflow Guide 2026",
                &["AI productivity", "productivity tools", "AI workflow"],
            ),
            template(
                "Automate Your Work Complete AI Automation Guide 2026",
                &["work automation", "AI automation", "productivity automation"],
            ),
            template(
                "AI Writing Tools Complete Content Creation Guide 2026",
                &["AI writing", "writing tools", "content AI"],
            ),
            template(
                "AI Email Management Complete Inbox Zero Guide 2026",
                &["AI email", "email automation", "inbox management"],
            ),
            template(
                "AI Meeting Tools Complete Productivity Guide 2026",
                &["AI meetings", "meeting tools", "productivity AI"],
            ),
            template(
                "AI Task Management Complete Organization Guide 2026",
                &["AI task management", "productivity organization", "task AI"],
            ),
            template(
                "AI Research Tools Complete Information Guide 2026",
                &["AI research", "research tools", "information AI"],
            ),
            template(
                "AI Time Management Complete Efficiency Guide 2026",
                &["AI time management", "efficiency tools", "time AI"],
            ),
            template(
                "AI Collaboration Tools Complete Team Guide 2026",
                &["AI collaboration", "team tools", "collaborative AI"],
            ),
            template(
                "AI Productivity ROI Complete Measurement Guide 2026",
                &["productivity ROI", "AI benefits", "productivity metrics"],
            ),
        ],
    },
];
