// Paragraph templates. `{keyword}`, `{title}` and `{category}` are substituted per article.

pub(crate) const INTRO: &[&str] = &[
    "This comprehensive guide explores {title}, providing detailed insights, expert strategies, and actionable techniques that professionals use to achieve exceptional results in 2026.",
    "Whether you're a developer, content creator, business professional, or AI enthusiast, this guide covers everything you need to know about {keyword}, from fundamental principles to advanced applications.",
    "You'll discover proven methodologies, real-world examples, industry best practices, and optimization strategies that deliver measurable results. This article is designed to be your complete resource, covering theoretical foundations, practical implementations, common pitfalls to avoid, and future trends shaping the landscape.",
    "By the end of this guide, you'll have a thorough understanding of how to leverage {keyword} effectively in your professional workflow, maximize productivity, achieve better outcomes, and stay ahead in the rapidly evolving AI ecosystem. Whether you're just getting started or looking to refine advanced techniques, you'll find valuable insights and actionable strategies throughout this comprehensive exploration.",
];

pub(crate) struct SectionTemplate {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub(crate) const BODY_SECTIONS: [SectionTemplate; 8] = [
    SectionTemplate {
        heading: "Understanding {keyword}: Fundamentals and Core Concepts",
        paragraphs: &[
            "Understanding {keyword} begins with grasping its fundamental principles and core concepts that form the foundation of effective implementation.",
            "{keyword} represents a significant advancement in artificial intelligence technology, offering capabilities that were previously impossible or extremely difficult to achieve. The technology works by leveraging large-scale machine learning models trained on diverse datasets, enabling natural language understanding, generation, and task completion across numerous domains.",
            "At its core, {keyword} excels at pattern recognition, contextual understanding, and generating coherent, contextually appropriate outputs based on input prompts and instructions. This makes it invaluable for content creation, automation, analysis, customer service, education, development, and countless other applications across industries.",
            "The fundamental architecture relies on transformer models that process input sequentially while maintaining attention across all elements, enabling deep contextual understanding. Key concepts include token-based processing where text is broken into units for analysis, attention mechanisms that identify relationships between different parts of input, embeddings that represent concepts in multidimensional space, and probability-based generation that selects likely next tokens.",
            "Understanding these fundamentals helps you appreciate both capabilities and limitations, enabling more effective prompting, better troubleshooting, and realistic expectations. The technology continues evolving rapidly with improvements in accuracy, capabilities, efficiency, and specialized applications.",
            "Staying current with fundamental developments ensures you can leverage new features and capabilities as they emerge in 2026 and beyond.",
        ],
    },
    SectionTemplate {
        heading: "Getting Started: Essential {keyword} Techniques and Setup",
        paragraphs: &[
            "Getting started with {keyword} requires understanding essential techniques and proper setup procedures for successful implementation.",
            "Initial setup depends on your use case, whether using web interfaces, API integration, or embedded applications. For web-based usage, create an account with the appropriate service provider, familiarize yourself with the interface and available features, understand pricing and usage limits, and configure settings for optimal performance.",
            "For API integration, obtain authentication credentials, install necessary SDKs or libraries for your programming language, configure environment variables for secure credential storage, and implement basic request-response patterns.",
            "Essential techniques include clear communication where you provide specific, detailed instructions rather than vague queries, context provision that supplies relevant background information for better understanding, role assignment where you specify the perspective or expertise you want the AI to adopt, format specification that defines how you want information structured and presented, and iterative refinement where you progressively improve outputs through follow-up prompts.",
            "Start with simple use cases to build understanding and confidence before tackling complex applications. Experiment with different prompting styles to discover what works best for your needs. Document successful patterns and approaches for reuse and consistency.",
            "Implement proper error handling and fallback mechanisms for robust applications. Consider security implications and implement appropriate safeguards, especially when handling sensitive data or integrating into production systems.",
        ],
    },
    SectionTemplate {
        heading: "Advanced Strategies for {keyword} Mastery",
        paragraphs: &[
            "Advanced strategies for {keyword} mastery elevate your capabilities beyond basic usage to professional-grade implementations.",
            "These strategies include chain-of-thought prompting that encourages step-by-step reasoning for more accurate and transparent outputs, few-shot learning where you provide examples of desired outputs before your actual request, meta-prompting that instructs the AI about how to interpret your prompts generally, constraint-based prompting that defines multiple specific parameters simultaneously, and iterative refinement that progressively builds better outputs through strategic follow-up prompts.",
            "Advanced users leverage conversation management to maintain context efficiently across multi-turn interactions while controlling token usage and costs. They implement systematic testing and validation processes to ensure consistency and quality.",
            "They use A/B testing methodologies to compare different prompting approaches and optimize for specific metrics. They develop domain-specific expertise by learning how {keyword} performs in their particular field and adapting techniques accordingly.",
            "Advanced strategies also include integration patterns that combine {keyword} with other systems, tools, and data sources for enhanced capabilities. Implement caching strategies to reduce redundant processing and costs. Use streaming for real-time applications where progressive output improves user experience.",
            "Develop custom workflows that automate complex multi-step processes. Consider implementing feedback loops where output quality informs future prompting strategies, creating continuously improving systems.",
        ],
    },
    SectionTemplate {
        heading: "Best Practices and Industry Standards for {keyword}",
        paragraphs: &[
            "Best practices and industry standards for {keyword} ensure reliable, effective, and responsible implementations in 2026.",
            "Key practices include clarity and specificity in all communications, providing sufficient context for accurate understanding, implementing appropriate security measures to protect sensitive information, monitoring usage and costs to maintain sustainability, validating critical outputs for accuracy and appropriateness, documenting approaches and decisions for maintainability, and testing thoroughly before production deployment.",
            "Industry standards emphasize responsible AI use including bias awareness and mitigation, transparency about AI involvement, privacy protection and data security, compliance with relevant regulations and policies, and appropriate human oversight especially for high-stakes decisions.",
            "Implement version control and change management for AI integrations to track modifications and enable rollback if needed. Establish clear ownership and governance for AI implementations within organizations.",
            "Create standard operating procedures for common tasks to ensure consistency across teams. Develop quality assurance processes that validate outputs meet required standards. Implement monitoring and alerting systems that detect anomalies, errors, or performance degradation.",
            "Maintain comprehensive documentation including architecture diagrams, configuration details, troubleshooting guides, and known limitations. Following these best practices and standards ensures sustainable, effective, and responsible usage that delivers long-term value.",
        ],
    },
    SectionTemplate {
        heading: "Common Mistakes and How to Avoid Them",
        paragraphs: &[
            "Common mistakes with {keyword} can significantly impact effectiveness, efficiency, and outcomes in your 2026 implementations.",
            "The most frequent error is insufficient specificity where vague, generic prompts produce equally vague results. Instead, provide detailed context, specific requirements, and clear expectations. Another common mistake is neglecting context provision, leaving the AI to make assumptions that may be incorrect. Always include relevant background information.",
            "Overcomplicating prompts with excessive, conflicting, or unnecessary instructions can confuse rather than clarify. Keep prompts focused on essential requirements. Expecting perfect first-attempt results leads to frustration; instead, plan for iterative refinement through follow-up prompts.",
            "Failing to validate critical information is dangerous since AI can generate plausible-sounding but inaccurate content. Always fact-check important outputs, especially for specialized domains, statistics, or recent events.",
            "Ignoring security best practices when handling sensitive data or deploying production systems creates serious risks. Implement proper authentication, encryption, access controls, and monitoring. Poor error handling that does not gracefully manage API failures, rate limits, or unexpected outputs creates poor user experiences and potential system failures.",
            "Not monitoring costs and usage can lead to unexpected bills, especially with high-volume or inefficient implementations. Set up alerts, budgets, and usage tracking. Learning from these common mistakes and implementing preventive measures dramatically improves your effectiveness and efficiency.",
        ],
    },
    SectionTemplate {
        heading: "Real-World Applications and Use Cases",
        paragraphs: &[
            "Real-world applications of {keyword} demonstrate its versatility and value across industries and use cases in 2026.",
            "In content creation, professionals use {keyword} for blog post drafting, social media content generation, email campaign creation, product description writing, and SEO optimization. Implementation includes establishing brand voice guidelines, creating content templates, integrating with content management systems, and implementing editorial workflows for review and refinement.",
            "In software development, {keyword} assists with code generation, debugging support, documentation creation, code review, and learning resources. Developers integrate AI assistance into IDEs, implement automated code review processes, generate boilerplate code, and create interactive coding tutorials.",
            "In customer service, businesses deploy AI-powered chatbots and virtual assistants for 24/7 support, common inquiry handling, troubleshooting guidance, and seamless escalation to human agents when needed. Implementation involves knowledge base development, conversation flow design, CRM integration, and continuous training from real interactions.",
            "In education, AI enables personalized tutoring, practice problem generation, concept explanations adapted to student level, automated grading assistance, and learning path recommendations. Educational implementations require careful accuracy verification and appropriate content filtering.",
            "In marketing, teams leverage AI for campaign ideation, ad copy generation, market research analysis, competitor analysis, and performance optimization. Each application requires domain-specific customization, appropriate validation and quality control, user experience optimization, and continuous refinement based on feedback and performance metrics.",
        ],
    },
    SectionTemplate {
        heading: "Optimization Techniques for Maximum Results",
        paragraphs: &[
            "Optimization techniques for {keyword} maximize effectiveness, efficiency, and value while minimizing costs and effort in 2026.",
            "Prompt optimization involves testing different phrasings to find most effective approaches, removing unnecessary verbosity while maintaining clarity, using proven templates for common tasks, and documenting successful patterns for reuse.",
            "Performance optimization includes implementing caching for frequently requested information, using appropriate models for each task, batching similar requests when possible, and implementing efficient conversation management that maintains context while controlling token usage.",
            "Cost optimization strategies include monitoring usage patterns to identify high-consumption areas, setting appropriate token limits for responses, implementing user quotas and rate limiting, choosing cost-effective models for each task, and using caching to reduce redundant API calls.",
            "Quality optimization involves implementing validation and review processes, using few-shot learning with examples for consistency, requesting multiple variations and selecting best results, implementing feedback loops that learn from user ratings, and continuously refining prompts based on output quality.",
            "User experience optimization includes implementing streaming for real-time feedback, providing clear loading indicators and progress information, designing graceful error handling and recovery, offering alternative suggestions when initial attempts fail, and enabling conversation reset and retry options.",
            "Systematic optimization across these dimensions ensures you extract maximum value while maintaining sustainable operations and delivering exceptional user experiences.",
        ],
    },
    SectionTemplate {
        heading: "Future Trends and Emerging Developments",
        paragraphs: &[
            "Future trends in {keyword} point toward more capable, accessible, and integrated AI systems that will transform how we work and interact with technology in 2026 and beyond.",
            "Multimodal capabilities combining text, images, audio, and other data types in unified systems will enable richer interactions and more sophisticated applications. Specialized domain-specific models fine-tuned for particular industries or use cases will provide better performance and understanding in specialized contexts without extensive prompting.",
            "Longer context windows will enable processing and understanding much larger documents, codebases, or conversation histories in single interactions. Improved reasoning capabilities will enhance ability to solve complex problems, perform multi-step analysis, and provide more reliable factual information.",
            "Personalization and adaptation where AI systems learn individual user preferences, communication styles, and domain expertise will make interactions more efficient and natural over time. Better integration with external tools, databases, and systems will create more powerful agentic AI that can take actions and interact with broader digital environments.",
            "Enhanced accuracy and reliability through better training methodologies, validation systems, and uncertainty awareness will increase confidence in AI outputs for higher-stakes applications. Improved efficiency reducing computational requirements and costs will make advanced AI capabilities more accessible and sustainable.",
            "Stronger safety and alignment ensuring AI systems behave in accordance with human values and intentions will address growing concerns about AI risks. Staying informed about these trends and preparing for emerging capabilities ensures you can leverage new developments effectively as they become available, maintaining competitive advantages in an AI-augmented world.",
        ],
    },
];

pub(crate) const CONCLUSION: &[&str] = &[
    "Mastering {title} provides significant competitive advantages in our increasingly AI-augmented professional landscape of 2026.",
    "The comprehensive techniques, strategies, and best practices explored in this guide offer a solid foundation for achieving exceptional results with {keyword} across diverse applications and domains.",
    "Success requires both technical understanding and practical experience. Continue experimenting with different approaches, learning from successes and failures, and refining techniques based on real-world results. The AI landscape evolves rapidly with new capabilities, models, and best practices emerging regularly.",
    "Commit to continuous learning through documentation review, community engagement, experimentation with new features, and staying current with industry developments. Remember that {keyword} is a tool that augments human capabilities rather than replacing human judgment, creativity, and decision-making.",
    "The most effective implementations thoughtfully combine AI capabilities with human expertise, using automation for repetitive tasks while reserving human attention for strategic thinking, creative problem-solving, and high-value activities.",
    "For more comprehensive tutorials, practical demonstrations, expert insights, and the latest developments in {category}, subscribe to our YouTube channel at https://www.youtube.com/@AILooop. We regularly publish in-depth guides, hands-on examples, industry analysis, and expert interviews to help you stay ahead in the AI revolution.",
    "Join our growing community of AI enthusiasts and professionals committed to mastering artificial intelligence technologies and applications. Subscribe today and never miss valuable content that can accelerate your AI journey and professional growth!",
];
